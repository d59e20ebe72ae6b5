use proptest::prelude::*;
use reef_evo::{FitnessAnomaly, FitnessValue};

proptest! {
    #[test]
    fn value_always_within_zero_and_threshold(fitness in any::<i32>(), threshold in 0i32..10_000) {
        let v = FitnessValue::new(fitness, threshold);
        prop_assert!(v.value() >= 0);
        prop_assert!(v.value() <= threshold);
        prop_assert_eq!(v.is_suitable(), v.value() >= threshold);
    }

    #[test]
    fn anomaly_recorded_iff_clamped(fitness in -500i32..500, threshold in 0i32..300) {
        let v = FitnessValue::new(fitness, threshold);
        let clamped = fitness < 0 || fitness > threshold;
        prop_assert_eq!(v.anomaly().is_some(), clamped);
        if !clamped {
            prop_assert_eq!(v.value(), fitness);
        }
    }

    #[test]
    fn negative_threshold_never_yields_negative_fitness(
        fitness in any::<i32>(),
        threshold in i32::MIN..0
    ) {
        let v = FitnessValue::new(fitness, threshold);
        prop_assert_eq!(v.value(), 0);
        prop_assert_eq!(v.anomaly(), Some(FitnessAnomaly::NegativeThreshold { threshold }));
    }
}

#[test]
fn fitness_serializes_clamped_value() {
    let json = serde_json::to_value(FitnessValue::new(150, 100)).expect("serialize");
    assert_eq!(json["fitness"], 100);
    assert_eq!(json["suitable_threshold"], 100);
    assert_eq!(json["anomaly"]["kind"], "above_threshold");

    let json = serde_json::to_value(FitnessValue::new(5, 100)).expect("serialize");
    assert!(json.get("anomaly").is_none());
}
