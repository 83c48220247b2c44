use cdefgen_pd::{Generator, GeneratorConfig, ZigTranslateC};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();
    let translator = ZigTranslateC::new(config.translator.clone());

    match Generator::new(config, translator).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
