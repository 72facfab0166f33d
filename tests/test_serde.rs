#![cfg(feature = "serde")]

use foox::{
    evolution::{EvolutionOptions, LogLevel},
    genome::Genome,
    kinds::{GenomeKind, IntervalKind, MutationSettings, SymbolKind},
    rng::RandomNumberGenerator,
};

#[test]
fn test_options_from_json() {
    let json = r#"{
        "max_generations": 250,
        "log_level": "Minimal",
        "population_size": 64,
        "mutation_range": 5,
        "mutation_rate": 0.25
    }"#;

    let options: EvolutionOptions = serde_json::from_str(json).unwrap();

    assert_eq!(options, EvolutionOptions::new(250, LogLevel::Minimal, 64, 5, 0.25));
    assert!(options.validate().is_ok());
}

#[test]
fn test_partial_options_fall_back_to_defaults() {
    let options: EvolutionOptions = serde_json::from_str(r#"{ "population_size": 12 }"#).unwrap();

    assert_eq!(options.get_population_size(), 12);
    assert_eq!(options.get_max_generations(), 100);
    assert_eq!(options.get_mutation_rate(), 0.4);
}

#[test]
fn test_scored_genome_keeps_its_score() {
    let genome: Genome<i32, f64> = Genome::scored(vec![7, 9, 10], 2.5);

    let json = serde_json::to_string(&genome).unwrap();
    let restored: Genome<i32, f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, genome);
    assert_eq!(restored.score(), Some(2.5));
}

#[test]
fn test_interval_kind_with_ceiling() {
    let kind = IntervalKind::consonant().with_ceiling(17);

    let json = serde_json::to_string(&kind).unwrap();
    let restored: IntervalKind = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, kind);
    assert_eq!(restored.ceiling(), Some(17));
}

#[test]
fn test_mutation_settings_reject_out_of_range_rate() {
    let result = serde_json::from_str::<MutationSettings>(r#"{"range":1,"rate":2.0}"#);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Mutation rate must lie within [0, 1]"));
}

#[test]
fn test_deserialized_mutation_settings_drive_mutation() {
    let settings: MutationSettings = serde_json::from_str(r#"{"range":1,"rate":1.0}"#).unwrap();
    assert_eq!(settings, MutationSettings::new(1, 1.0).unwrap());

    let kind = SymbolKind::new(vec!['q']).unwrap();
    let mut genome: Genome<char, usize> = Genome::scored(vec!['a', 'b'], 0);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let altered = kind
        .mutate(&mut genome, &settings, &vec!['x', 'y'], &mut rng)
        .unwrap();

    assert!(altered);
    assert_eq!(genome.chromosome(), &['q', 'q']);
    assert!(!genome.is_scored());
}
