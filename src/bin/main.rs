use anyhow::Context;
use zonemem::{
    collection::SystemCommandRunner,
    options::{args, get_config_path, init_options, read_config},
    report,
};

fn main() -> anyhow::Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        zonemem::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::path::Path::new("zmem-debug.log"),
        )?;
    }

    let config_location = args.general_args.config_location.as_deref();
    let config_path = get_config_path(config_location);
    let config = read_config(config_path.as_deref(), config_location.is_some())
        .context("Unable to properly parse the config file.")?;

    let options = init_options(&args, &config)
        .context("Found an issue while trying to set up zmem's options.")?;

    println!("{}", report(&options, SystemCommandRunner)?);

    Ok(())
}
