//! Generates shell completions and a manpage for zmem when `ZMEM_GENERATE` is set.

use std::{env, fs, io::Result, path::Path};

use clap_complete::{generate_to, shells::Shell, Generator};
use clap_complete_nushell::Nushell;

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut Command, out_dir: &Path) -> Result<std::path::PathBuf>
where
    G: Generator,
{
    generate_to(to_generate, cmd, "zmem", out_dir)
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/zmem/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/zmem/manpage/";

    match env::var_os("ZMEM_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = Path::new(COMPLETION_DIR).to_path_buf();
            let manpage_out_dir = Path::new(MANPAGE_DIR).to_path_buf();

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut cmd = Args::command();
            generate_completions(Shell::Bash, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut cmd, &completion_out_dir)?;
            generate_completions(Nushell, &mut cmd, &completion_out_dir)?;

            // Generate manpage
            let cmd = cmd.name("zmem");
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("zmem.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=ZMEM_GENERATE");

    Ok(())
}
