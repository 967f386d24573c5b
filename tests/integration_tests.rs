use duck_dock::core::dynamic;
use duck_dock::{bike_is_working, Bike, DuckError, FleetEngine, Reporter, Result, Station, Working};

#[derive(Default)]
struct VecReporter {
    verdicts: Vec<bool>,
}

impl Reporter for VecReporter {
    fn report(&mut self, verdict: bool) -> Result<()> {
        self.verdicts.push(verdict);
        Ok(())
    }
}

#[test]
fn test_end_to_end_sequence_is_true_then_false() {
    let mut engine = FleetEngine::new(VecReporter::default());
    engine.run().unwrap();

    assert_eq!(engine.into_reporter().verdicts, vec![true, false]);
}

#[test]
fn test_dispatcher_never_checks_type_identity() {
    // One consumer, two unrelated types, no shared state.
    assert!(bike_is_working(&Station::new()));
    assert!(!bike_is_working(&Bike::new()));
}

#[test]
fn test_repeated_dispatch_is_stable() {
    let station = Station::new();
    let bike = Bike::new();
    for _ in 0..10 {
        assert!(bike_is_working(&station));
        assert!(!bike_is_working(&bike));
    }
}

#[test]
fn test_dynamic_objects_mirror_the_fleet() {
    let verdicts: Vec<bool> = [dynamic::station(), dynamic::bike()]
        .iter()
        .map(|unit| dynamic::bike_is_working(unit).unwrap())
        .collect();

    assert_eq!(verdicts, vec![true, false]);
}

#[test]
fn test_dynamic_dispatch_fails_without_the_capability() {
    let pump = dynamic::DynObject::new("Pump");
    assert!(!pump.responds_to("working"));

    match dynamic::bike_is_working(&pump) {
        Err(DuckError::CapabilityMissing { receiver, capability }) => {
            assert_eq!(receiver, "Pump");
            assert_eq!(capability, "working");
        }
        other => panic!("expected a capability error, got {other:?}"),
    }
}

#[test]
fn test_release_bike_surfaces_the_undefined_delegate() {
    // Static rendering
    let err = Station::new().release_bike().unwrap_err();
    assert!(matches!(
        err,
        DuckError::CapabilityMissing { ref capability, .. } if capability == "release"
    ));

    // Dynamic rendering behaves the same way
    let err = dynamic::station().invoke("release_bike").unwrap_err();
    assert!(matches!(
        err,
        DuckError::CapabilityMissing { ref capability, .. } if capability == "release"
    ));
}

#[test]
fn test_third_party_types_can_join_the_fleet() {
    struct Scooter;
    impl Working for Scooter {
        fn working(&self) -> bool {
            true
        }
    }

    let fleet: Vec<Box<dyn Working>> = vec![
        Box::new(Station::new()),
        Box::new(Bike::new()),
        Box::new(Scooter),
    ];
    let verdicts: Vec<bool> = fleet.iter().map(|unit| unit.working()).collect();

    assert_eq!(verdicts, vec![true, false, true]);
}
