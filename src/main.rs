use std::process::ExitCode;
use wfcheck::cli::{App, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse_args();

    let outcome = match App::from_args(&args) {
        Ok(mut app) => app.run(args).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
