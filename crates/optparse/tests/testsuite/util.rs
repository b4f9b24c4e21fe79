pub fn greet_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> =
        once_cell::sync::Lazy::new(|| compile_example("greet"));
    snapbox::cmd::Command::new(&*BIN)
        .env_remove("OPTPARSE_LOG")
        .env_remove("CLICOLOR_FORCE")
}

fn compile_example(name: &str) -> std::path::PathBuf {
    let run = escargot::CargoBuild::new()
        .manifest_path(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
        .example(name)
        .current_release()
        .current_target()
        .target_dir(target_dir())
        .run()
        .unwrap_or_else(|e| panic!("{e}"));
    run.path().to_owned()
}

fn target_dir() -> std::path::PathBuf {
    const TEMPDIR: &str = env!("CARGO_TARGET_TMPDIR");

    let target_dir = std::path::Path::new(TEMPDIR).join("optparse_target");
    std::fs::create_dir_all(&target_dir).unwrap();
    target_dir
}
