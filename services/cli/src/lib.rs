mod cli;
mod demo;
mod infra;
mod render;

use health_plus::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
