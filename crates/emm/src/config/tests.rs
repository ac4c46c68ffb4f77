use std::path::PathBuf;

use super::*;

#[test]
fn empty_config() {
    let got: RawConfig = toml::from_str("").unwrap();
    assert_eq!(got, RawConfig::default());
    let config = got.config(PathBuf::from("/opt/amber")).unwrap();
    assert_eq!(config, Config::new("/opt/amber"));
}

#[test]
fn full_config() {
    let got: RawConfig = toml::from_str(
        r#"
amberhome = "/opt/amber22"
scratch_dir = "/tmp/scratch"
force_field = "leaprc.gaff2"
verbose = true
imin = 1
maxcyc = 2500
ncyc = 100
ntpr = 10
cut = 12.5
igb = 5
ntb = 0
suffix = "_opt"
remove_run_files = false
cpptraj_template = "parm {{.prmtop}}\ntrajin {{.restart}}\ntrajout {{.pdb}} pdb\ngo\n"
"#,
    )
    .unwrap();
    let want = RawConfig {
        amberhome: Some(PathBuf::from("/opt/amber22")),
        scratch_dir: Some(PathBuf::from("/tmp/scratch")),
        force_field: Some("leaprc.gaff2".to_owned()),
        verbose: Some(true),
        imin: Some(1),
        maxcyc: Some(2500),
        ncyc: Some(100),
        ntpr: Some(10),
        cut: Some(12.5),
        igb: Some(5),
        ntb: Some(0),
        suffix: Some("_opt".to_owned()),
        remove_run_files: Some(false),
        tleap_template: None,
        sander_template: None,
        cpptraj_template: Some(TemplateSrc::Literal(
            "parm {{.prmtop}}\ntrajin {{.restart}}\ntrajout {{.pdb}} pdb\ngo\n"
                .to_owned(),
        )),
    };
    assert_eq!(got, want);

    let config = got.config(PathBuf::from("/opt/amber22")).unwrap();
    assert_eq!(config.scratch_dir, PathBuf::from("/tmp/scratch"));
    assert_eq!(config.force_field, "leaprc.gaff2");
    assert!(config.verbose);
    assert!(config.cpptraj_template.body.ends_with("pdb\ngo\n"));
    assert_eq!(config.sander_template, Template::from(sander::TEMPLATE));
}

#[test]
fn unknown_field() {
    let got = toml::from_str::<RawConfig>("maxcycles = 10");
    assert!(got.is_err());
}

#[test]
fn template_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("min.tmpl");
    std::fs::write(&path, "&cntrl maxcyc={{.maxcyc}} /\n").unwrap();
    let raw: RawConfig = toml::from_str(&format!(
        "sander_template = {{ file = {:?} }}",
        path.display().to_string()
    ))
    .unwrap();
    let config = raw.config(PathBuf::from("/opt/amber")).unwrap();
    assert_eq!(config.sander_template.body, "&cntrl maxcyc={{.maxcyc}} /\n");
}

#[test]
fn missing_template_file() {
    let raw = RawConfig {
        tleap_template: Some(TemplateSrc::File {
            file: PathBuf::from("/nonexistent/tleap.in"),
        }),
        ..Default::default()
    };
    let err = raw.config(PathBuf::from("/opt/amber")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("/nonexistent/tleap.in"));
}

#[test]
fn load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emm.toml");
    std::fs::write(&path, "maxcyc = 42\nsuffix = \"_cfg\"\n").unwrap();
    let got = RawConfig::load(&path).unwrap();
    assert_eq!(got.maxcyc, Some(42));
    assert_eq!(got.suffix.as_deref(), Some("_cfg"));

    let err = RawConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn params_cntrl() {
    let params = Params {
        maxcyc: 10,
        cut: 8.0,
        ..Default::default()
    };
    let cntrl = params.cntrl();
    assert_eq!(cntrl.maxcyc, 10);
    assert_eq!(cntrl.cut, 8.0);
    assert_eq!(cntrl.ncyc, 500);
    assert_eq!(Params::default().suffix, "_min");
    assert!(Params::default().remove_run_files);
}
