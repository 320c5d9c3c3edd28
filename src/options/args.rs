// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself. build.rs includes this file, so no inner doc comments or std imports.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "zmem [OPTIONS]";

/// The arguments for zmem.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub tool_args: ToolArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If not set, the config file in the default config directory is read if it exists."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        help = "Prints the result as JSON.",
        long_help = "Prints the collected memory record as a JSON object instead of plain text."
    )]
    pub json: bool,

    #[arg(
        long,
        help = "Queries swap memory instead of total memory.",
        long_help = indoc! {
            "Queries swap memory instead of total memory.

            Swap is not supported for zones, so this will always fail."
        }
    )]
    pub swap: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Tool Options")]
pub struct ToolArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Sets the path to the zonename tool.",
        long_help = "Sets the absolute path to the zonename tool. Defaults to '/usr/bin/zonename'."
    )]
    pub zonename: Option<std::path::PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Sets the path to the prtconf tool.",
        long_help = "Sets the absolute path to the prtconf tool, used in the global zone. \
                    Defaults to '/usr/sbin/prtconf'."
    )]
    pub prtconf: Option<std::path::PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Sets the path to the zonememstat tool.",
        long_help = "Sets the absolute path to the zonememstat tool, used in non-global zones. \
                    Defaults to '/usr/bin/zonememstat'."
    )]
    pub zonememstat: Option<std::path::PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based on zmem's args.
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns the parsed [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
