use pisos_core::PisosError;

#[test]
fn connector_errors_carry_the_connector_name() {
    let err = PisosError::connector("pisos-apify", "status 500");
    match err {
        PisosError::Connector { connector, msg } => {
            assert_eq!(connector, "pisos-apify");
            assert_eq!(msg, "status 500");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[test]
fn run_failed_reports_the_terminal_status() {
    let err = PisosError::run_failed("pisos-apify", "ABORTED");
    assert_eq!(err.to_string(), "pisos-apify run failed with status ABORTED");
}

#[test]
fn every_variant_is_fatal() {
    for err in [
        PisosError::unsupported("search"),
        PisosError::connector("x", "y"),
        PisosError::run_failed("x", "FAILED"),
        PisosError::not_found("dataset abc"),
        PisosError::Data("bad payload".into()),
        PisosError::InvalidArg("bad arg".into()),
        PisosError::Other("boom".into()),
    ] {
        assert!(err.is_fatal());
    }
}
