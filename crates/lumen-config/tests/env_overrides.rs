use figment::Jail;
use lumen_config::LumenConfig;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("LUMEN_INDEX__MAX_FILE_BYTES", "1024");
        jail.set_env("LUMEN_GENERAL__PRETTY", "false");

        let config = LumenConfig::load().expect("config loads");
        assert_eq!(config.index.max_file_bytes, 1024);
        assert!(!config.general.pretty);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lumen")?;
        jail.create_file(".lumen/config.toml", "[index]\nexport_macro_suffix = \"_DLL\"\n")?;
        jail.set_env("LUMEN_INDEX__EXPORT_MACRO_SUFFIX", "_EXPORT");

        let config = LumenConfig::load().expect("config loads");
        assert_eq!(config.index.export_macro_suffix, "_EXPORT");
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("LUMEN_INDEX__MAX_FILE_BYTES", "lots");

        let err = LumenConfig::load().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
