use std::{env, fs, io::Result, path::Path};

use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!(
                "Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...",
            );
        }
    }

    res
}

fn generate_artifacts() -> Result<()> {
    const ENV_KEY: &str = "CPUFI_GENERATE";

    match env::var_os(ENV_KEY) {
        Some(var) if !var.is_empty() => {
            const COMPLETION_DIR: &str = "./target/tmp/cpufi/completion/";
            const MANPAGE_DIR: &str = "./target/tmp/cpufi/manpage/";

            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut app = build_cmd();
            generate_to(Shell::Bash, &mut app, "cpufi", &completion_out_dir)?;
            generate_to(Shell::Zsh, &mut app, "cpufi", &completion_out_dir)?;
            generate_to(Shell::Fish, &mut app, "cpufi", &completion_out_dir)?;
            generate_to(Shell::PowerShell, &mut app, "cpufi", &completion_out_dir)?;
            generate_to(Shell::Elvish, &mut app, "cpufi", &completion_out_dir)?;

            // Generate manpage
            let app = app.name("cpufi");
            let man = clap_mangen::Man::new(app);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("cpufi.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed={ENV_KEY}");

    Ok(())
}

fn main() -> Result<()> {
    generate_artifacts()?;
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
