use crate::{PolyError, Polynomial, Substitutions, Term, Variable, format_number, poly};

fn reference_poly() -> Polynomial {
    poly![
        Term::variable(7.0, 'z', 3).unwrap(),
        Term::variable(5.0, 'y', 1).unwrap(),
        Term::variable(3.0, 'x', 2).unwrap()
    ]
}

#[test]
fn test_reference_scenario() {
    let subs = Substitutions::from([('x', 20.0), ('y', 40.0), ('z', 15.0)]);
    let result = reference_poly().evaluate(&subs).unwrap();

    // 7*15^3 + 5*40 + 3*20^2
    assert_eq!(result, 23625.0 + 200.0 + 1200.0);
    assert_eq!(format_number(result), "25025");
}

#[test]
fn test_reference_rendering() {
    let poly = reference_poly();
    assert_eq!(poly.term_count(), 3);
    assert_eq!(poly.to_string(), "7z^3+5y+3x^2");
    assert_eq!(poly.sort().to_string(), "7z^3+5y+3x^2");
}

#[test]
fn test_substitution_order_does_not_matter() {
    let a = Substitutions::from([('z', 15.0), ('x', 20.0), ('y', 40.0)]);
    let b = Substitutions::new()
        .with('y', 40.0)
        .with('z', 15.0)
        .with('x', 20.0);
    let poly = reference_poly();
    assert_eq!(poly.evaluate(&a), poly.evaluate(&b));
}

#[test]
fn test_missing_variable_aborts_whole_evaluation() {
    let subs = Substitutions::from([('x', 20.0), ('y', 40.0)]);
    let z = Variable::new('z').unwrap();
    assert_eq!(
        reference_poly().evaluate(&subs),
        Err(PolyError::MissingSubstitution(z))
    );
}

#[test]
fn test_missing_variable_inside_nested_term() {
    let inner = poly![Term::linear(1.0, 'w').unwrap()];
    let outer = poly![Term::constant(1.0), Term::nested(2.0, inner, 2)];
    let err = outer.evaluate(&Substitutions::new()).unwrap_err();
    assert!(matches!(err, PolyError::MissingSubstitution(v) if v.letter() == 'w'));
}

#[test]
fn test_deeply_nested_expression() {
    // ((x+1)+1)... with 50 levels evaluates to x + 50
    let mut poly = poly![Term::linear(1.0, 'x').unwrap()];
    for _ in 0..50 {
        poly = poly![Term::nested_linear(1.0, poly), Term::constant(1.0)];
    }
    assert_eq!(poly.depth(), 50);
    assert_eq!(poly.evaluate_at('x', 2.0), Ok(52.0));
}

#[test]
fn test_nested_rendering_with_signs() {
    let inner = poly![
        Term::variable(2.0, 'a', 2).unwrap(),
        Term::linear(-3.0, 'b').unwrap()
    ];
    let outer = poly![
        Term::nested(-1.5, inner.clone(), 2),
        Term::nested_linear(1.0, inner),
        Term::constant(-4.0)
    ];
    assert_eq!(outer.to_string(), "-1.5(2a^2-3b)^2+2a^2-3b-4");
}

#[test]
fn test_quick_eval_ignores_letter() {
    let t = Term::variable(2.0, 'k', 3).unwrap();
    assert_eq!(t.quick_eval(2.0), t.evaluate_at('k', 2.0));
    assert_eq!(t.quick_eval(2.0), Ok(16.0));
}

#[test]
fn test_unused_non_letter_key_is_ignored() {
    let constants = poly![Term::constant(4.0), Term::constant(-1.5)];
    assert_eq!(constants.evaluate_at('1', 0.0), Ok(2.5));
    assert_eq!(
        Polynomial::from_term(Term::constant(4.0)).evaluate_at('1', 0.0),
        Ok(4.0)
    );

    let extra = Substitutions::from([('x', 20.0), ('y', 40.0), ('z', 15.0), ('7', 1.0)]);
    assert_eq!(reference_poly().evaluate(&extra), Ok(25025.0));

    // A key no variable reads leaves the variable terms unsatisfied
    let z = Variable::new('z').unwrap();
    assert_eq!(
        reference_poly().evaluate_at('7', 1.0),
        Err(PolyError::MissingSubstitution(z))
    );
}

#[test]
fn test_constant_forms_accept_any_character() {
    // Zero coefficient or zero power reduce to constants before the letter matters
    let poly = poly![
        Term::variable(0.0, '#', 3).unwrap(),
        Term::variable(3.0, '1', 0).unwrap(),
        Term::linear(2.0, 'x').unwrap()
    ];
    assert_eq!(poly.to_string(), "0+3+2x");
    assert_eq!(poly.evaluate_at('x', 5.0), Ok(13.0));
}
