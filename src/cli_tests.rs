//! Tests for cli

use super::*;
use crate::geometry::{Direction, place};

#[test]
fn test_parse_bounds() {
    assert_eq!(
        parse_bounds("500, 100,40,20").unwrap(),
        Bounds::new(500.0, 100.0, 40.0, 20.0)
    );
    assert_eq!(
        parse_bounds("-3,-4.5,1,1").unwrap(),
        Bounds::new(-3.0, -4.5, 1.0, 1.0)
    );
}

#[test]
fn test_parse_bounds_rejects_bad_input() {
    for input in ["", "1,2,3", "1,2,3,4,5", "a,b,c,d", "1,2,-3,4", "1,2,inf,4"] {
        assert!(
            matches!(parse_bounds(input), Err(HovertipError::InvalidArgument(_))),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("80x30").unwrap(), Size::new(80.0, 30.0));
    assert_eq!(parse_size("12.5X4").unwrap(), Size::new(12.5, 4.0));
    assert!(parse_size("80").is_err());
    assert!(parse_size("80x-1").is_err());
}

#[test]
fn test_place_args_parse_and_request() {
    let cli = Cli::try_parse_from([
        "hovertip", "place", "--trigger", "500,100,40,20", "--size", "80x30", "--scroll", "480",
    ])
    .unwrap();

    let Some(Command::Place(args)) = cli.command else {
        panic!("expected place subcommand");
    };
    let placement = place(&args.request(&GeometryConfig::default()));

    assert_eq!(placement.top, 541.0);
    assert_eq!(placement.left, 80.0);
    assert_eq!(placement.direction, Direction::Up);
}

#[test]
fn test_place_args_overrides() {
    let cli = Cli::try_parse_from([
        "hovertip", "place", "--trigger", "10,50,4,2", "--size", "10x3", "--side",
        "--offset", "0", "--clearance", "1",
    ])
    .unwrap();

    let Some(Command::Place(args)) = cli.command else {
        panic!("expected place subcommand");
    };
    let request = args.request(&GeometryConfig::default());

    assert!(request.side);
    assert_eq!(request.offset, 0.0);
    assert_eq!(request.pointer_clearance, 1.0);
}

#[test]
fn test_demo_is_optional() {
    let cli = Cli::try_parse_from(["hovertip"]).unwrap();
    assert!(cli.command.is_none());

    let cli = Cli::try_parse_from(["hovertip", "demo", "--config", "custom.toml"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Demo { config: Some(_) })));
}
