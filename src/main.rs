mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("flyrewards: {err}");
        std::process::exit(1);
    }
}
