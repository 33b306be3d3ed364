use lispet::{evaluate, parse, printer, standard_environment};

fn main() {
    pretty_env_logger::init();
    let program = "(+ 10 5 (- 10 3 3))";
    let env = standard_environment();
    match parse(program).map_err(|e| e.to_string()).and_then(|expr| {
        evaluate(&expr, &env).map_err(|e| e.to_string())
    }) {
        Ok(value) => println!("{}", printer::pr_str(&value)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
