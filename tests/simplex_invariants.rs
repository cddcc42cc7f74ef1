use portfolio_rl_adjuster::{
    adjust_weights, AdjustError, AdjustParams, RewardSignal, WeightAdjuster,
};

fn assert_on_simplex(w: &[f64]) {
    assert!(w.iter().all(|x| *x >= 0.0), "negative entry in {w:?}");
    let sum: f64 = w.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum {sum} not 1 for {w:?}");
}

#[test]
fn simplex_invariant_holds_across_inputs() {
    portfolio_rl_adjuster::logging::init("warn");

    let adj = WeightAdjuster::new(AdjustParams {
        eta: 0.5,
        clip_min: 1e-12,
    });

    let cases: Vec<(Vec<f64>, RewardSignal)> = vec![
        (vec![0.5, 0.3, 0.2], 0.1.into()),
        (vec![0.4, 0.3, 0.3], vec![0.1, -0.2, 0.0].into()),
        (vec![1.0], 0.9.into()),
        (vec![3.0, 1.0, 6.0], (-0.4).into()),
        (vec![0.25; 4], vec![1.5, -1.5, 0.0, 0.3].into()),
    ];

    for (weights, reward) in cases {
        let out = adj.adjust(&weights, reward).unwrap();
        assert_eq!(out.len(), weights.len());
        assert_on_simplex(&out);
    }
}

#[test]
fn repeated_positive_signal_concentrates_weight() {
    let adj = WeightAdjuster::new(AdjustParams {
        eta: 0.1,
        clip_min: 1e-12,
    });

    let mut w = vec![1.0 / 3.0; 3];
    for _ in 0..50 {
        w = adj.adjust(&w, [0.5, 0.0, -0.5]).unwrap();
        assert_on_simplex(&w);
    }
    assert!(w[0] > 0.9);
    assert!(w[2] < 0.01);
}

#[test]
fn extreme_collapse_is_rejected_not_returned() {
    let adj = WeightAdjuster::new(AdjustParams {
        eta: 1e9,
        clip_min: 0.0,
    });
    let err = adj.adjust(&[0.6, 0.4], -1e9).unwrap_err();
    assert!(matches!(
        err,
        AdjustError::InvalidInput(_) | AdjustError::Collapse(_)
    ));
}

#[test]
fn default_params_match_documented_values() {
    let params = AdjustParams::default();
    assert_eq!(params.eta, 0.01);
    assert_eq!(params.clip_min, 1e-12);

    // tiny eta barely moves an already balanced vector
    let out = adjust_weights(&[0.5, 0.5], [0.1, -0.1]).unwrap();
    assert_on_simplex(&out);
    assert!((out[0] - 0.5).abs() < 0.01);
    assert!(out[0] > out[1]);
}

#[test]
fn reward_signal_decodes_from_scalar_or_array_json() {
    let scalar: RewardSignal = serde_json::from_str("0.02").unwrap();
    assert_eq!(scalar, RewardSignal::Scalar(0.02));

    let vector: RewardSignal = serde_json::from_str("[0.1, -0.2, 0.0]").unwrap();
    assert_eq!(vector, RewardSignal::PerAsset(vec![0.1, -0.2, 0.0]));

    let params: AdjustParams = serde_json::from_str(r#"{"eta": 0.05, "clip_min": 1e-9}"#).unwrap();
    assert_eq!(params.eta, 0.05);
    assert_eq!(params.clip_min, 1e-9);
}
