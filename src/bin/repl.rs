use lispet::{cmdline, standard_environment};

fn main() -> std::io::Result<()> {
    pretty_env_logger::init();
    let env = standard_environment();
    cmdline::launch(&env)
}
