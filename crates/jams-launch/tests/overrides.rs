use jams_launch::overrides::build_overrides;
use jams_launch::params::ParameterSet;
use std::path::PathBuf;

fn full_params() -> ParameterSet {
    ParameterSet {
        name: Some("sweep_a".to_string()),
        size: Some("16,16,16".to_string()),
        temperature: Some("1.5".to_string()),
        alpha: Some("0.1,0.2".to_string()),
        cmc_constraint_theta: Some("45".to_string()),
        cmc_constraint_phi: Some("90".to_string()),
        extra: Some("solver : {max_steps=1000;};".to_string()),
        ..ParameterSet::new(8)
    }
}

#[test]
fn full_parameter_set_emits_fixed_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out_dir = temp.path().join("results");
    let inputs = vec![
        PathBuf::from("base.cfg"),
        PathBuf::from("overrides.cfg"),
        PathBuf::from("state_a.h5"),
        PathBuf::from("state_b.h5"),
    ];
    let outputs = vec![out_dir.join("final.h5")];

    let tokens = build_overrides(&full_params(), &inputs, &outputs).expect("builds");

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0], format!("--output=\"{}\"", out_dir.display()));
    assert_eq!(tokens[1], "--name=\"sweep_a\"");
    assert_eq!(tokens[2], "\"base.cfg\"");
    assert_eq!(tokens[3], "\"overrides.cfg\"");
    assert_eq!(tokens[4], "\"lattice : {spins=\\\"state_a.h5\\\";};\"");
    assert_eq!(tokens[5], "\"lattice : { size = [16,16,16]; }; \"");
    assert_eq!(tokens[6], "\"physics : {temperature=1.5;};\"");
    assert_eq!(tokens[7], "\" materials = ( {alpha = 0.1;},  {alpha = 0.2;},  );\"");
    assert_eq!(tokens[8], "\"solver : {cmc_constraint_theta=45;};\"");
    assert_eq!(tokens[9], "\"solver : {cmc_constraint_phi=90;};\"");
    assert_eq!(tokens[10], "\"solver : {max_steps=1000;};\"");
}

#[test]
fn absent_fields_emit_nothing_and_keep_order() {
    let params = ParameterSet {
        temperature: Some("0.5".to_string()),
        extra: Some("raw".to_string()),
        ..ParameterSet::new(1)
    };

    let tokens = build_overrides(&params, &[], &[]).expect("builds");

    assert_eq!(
        tokens,
        vec![
            "\"physics : {temperature=0.5;};\"".to_string(),
            "\"raw\"".to_string(),
        ]
    );
}

#[test]
fn alpha_values_map_to_one_element_each() {
    let params = ParameterSet {
        alpha: Some("0.1,0.2,0.3".to_string()),
        ..ParameterSet::new(1)
    };

    let tokens = build_overrides(&params, &[], &[]).expect("builds");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].matches("{alpha = ").count(), 3);
    assert_eq!(
        tokens[0],
        "\" materials = ( {alpha = 0.1;},  {alpha = 0.2;},  {alpha = 0.3;},  );\""
    );
}

#[test]
fn only_first_h5_input_is_used() {
    let inputs = vec![
        PathBuf::from("first.h5"),
        PathBuf::from("second.h5"),
    ];

    let tokens = build_overrides(&ParameterSet::new(1), &inputs, &[]).expect("builds");

    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].contains("first.h5"));
    assert!(!tokens.iter().any(|token| token.contains("second.h5")));
}

#[test]
fn malformed_values_pass_through_unchanged() {
    // Value syntax belongs to the simulation's own parser.
    let params = ParameterSet {
        size: Some("not,numbers,at all".to_string()),
        temperature: Some("warm".to_string()),
        ..ParameterSet::new(1)
    };

    let tokens = build_overrides(&params, &[], &[]).expect("builds");

    assert_eq!(tokens[0], "\"lattice : { size = [not,numbers,at all]; }; \"");
    assert_eq!(tokens[1], "\"physics : {temperature=warm;};\"");
}

#[test]
fn output_directory_is_created() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out_dir = temp.path().join("nested").join("run_01");
    let outputs = vec![out_dir.join("final.h5")];

    build_overrides(&ParameterSet::new(1), &[], &outputs).expect("builds");

    assert!(out_dir.is_dir());
}

#[test]
fn bare_output_filename_maps_to_working_directory() {
    let outputs = vec![PathBuf::from("final.h5")];

    let tokens = build_overrides(&ParameterSet::new(1), &[], &outputs).expect("builds");

    assert_eq!(tokens[0], "--output=\".\"");
}

#[test]
fn tokens_carry_single_braces_before_escaping() {
    let tokens = build_overrides(&full_params(), &[], &[]).expect("builds");

    for token in &tokens {
        assert!(!token.contains("{{"), "pre-escape token double-braced: {token}");
        assert!(!token.contains("}}"), "pre-escape token double-braced: {token}");
    }
}
