use nested_poly::{PolyError, Polynomial, Substitutions, Term, format_number};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), PolyError> {
    // Diagnostics go to stderr; stdout only carries the result
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let poly = Polynomial::new(vec![
        Term::variable(7.0, 'z', 3)?,
        Term::variable(5.0, 'y', 1)?,
        Term::variable(3.0, 'x', 2)?,
    ]);
    let subs = Substitutions::from([('x', 20.0), ('y', 40.0), ('z', 15.0)]);

    println!("{}", format_number(poly.evaluate(&subs)?));
    Ok(())
}
