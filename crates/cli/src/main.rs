use std::process::ExitCode;

fn main() -> ExitCode {
    stowquote_cli::run()
}
