use super::*;
use curve::{Group, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_inputs(rng: &mut StdRng, n: usize) -> (Vec<Projective>, Vec<ScalarField>) {
    let points = (0..n).map(|_| rng.random::<Projective>()).collect();
    let scalars = (0..n).map(|_| ScalarField::random(rng)).collect();
    (points, scalars)
}

#[test]
fn test_all_engines_agree_with_naive() {
    let mut rng = StdRng::seed_from_u64(42);
    let (points, scalars) = random_inputs(&mut rng, 7);
    let expected = Projective::multi_scalar_mul(&points, &scalars);

    assert_eq!(Straus::multiscalar_mul(&scalars, &points).unwrap(), expected);
    assert_eq!(Straus::vartime_multiscalar_mul(&scalars, &points).unwrap(), expected);
    assert_eq!(Pippenger::vartime_multiscalar_mul(&scalars, &points).unwrap(), expected);
    assert_eq!(Projective::vartime_multiscalar_mul(&scalars, &points).unwrap(), expected);

    let precomputed = VartimePrecomputedStraus::new(&points);
    assert_eq!(precomputed.vartime_multiscalar_mul(&scalars).unwrap(), expected);

    let subset = VartimePrecomputedSubsetStraus::new(&points);
    assert_eq!(
        subset
            .vartime_subset_multiscalar_mul(scalars.iter().enumerate())
            .unwrap(),
        expected
    );
}

#[test]
fn test_fixed_base_matches_variable_base_for_every_split() {
    let mut rng = StdRng::seed_from_u64(7);
    let (points, scalars) = random_inputs(&mut rng, 4);
    let expected = Projective::vartime_multiscalar_mul(&scalars, &points).unwrap();

    for split in 0..=points.len() {
        let precomputed = VartimePrecomputedStraus::new(&points[..split]);
        let result = precomputed
            .vartime_mixed_multiscalar_mul(&scalars[..split], &scalars[split..], &points[split..])
            .unwrap();
        assert_eq!(result, expected, "split {split}");
    }
}

#[test]
fn test_single_term_matches_fixed_base_scalar_mul() {
    let mut rng = StdRng::seed_from_u64(9);
    let s = ScalarField::random(&mut rng);
    let g = Projective::generator();

    let precomputed = VartimePrecomputedStraus::new([g]);
    assert_eq!(
        precomputed.vartime_multiscalar_mul([s]).unwrap(),
        Projective::mul_generator(&s)
    );
}

#[test]
fn test_pippenger_threshold_from_toml() {
    let mut rng = StdRng::seed_from_u64(3);
    let (points, scalars) = random_inputs(&mut rng, 5);
    let config = MsmConfig::from_toml_str(
        r#"
        pippenger_threshold = 4
        dynamic_naf_width = 6
        "#,
    )
    .unwrap();

    let result = optional_multiscalar_mul_with_config(
        &scalars,
        points.iter().copied().map(Some),
        &config,
    )
    .unwrap();
    assert_eq!(result, Projective::multi_scalar_mul(&points, &scalars));
}

#[test]
fn test_negated_scalars_cancel() {
    let mut rng = StdRng::seed_from_u64(5);
    let (points, scalars) = random_inputs(&mut rng, 3);

    let mut all_points = points.clone();
    all_points.extend(points.iter().copied());
    let mut all_scalars = scalars.clone();
    all_scalars.extend(scalars.iter().map(|&s| -s));

    assert!(
        Projective::vartime_multiscalar_mul(&all_scalars, &all_points)
            .unwrap()
            .is_identity()
    );
    assert!(
        Projective::multiscalar_mul(&all_scalars, &all_points)
            .unwrap()
            .is_identity()
    );
}
