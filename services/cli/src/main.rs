use health_plus_cli::run;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        let code = if err.is_user_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}
