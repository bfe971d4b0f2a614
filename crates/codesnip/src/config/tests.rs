use std::path::PathBuf;

use pretty_assertions::assert_eq;
use snip_render::Theme;

use super::{parse_args, Command, SnipConfig, DEFAULT_FONT, DEFAULT_OUTPUT};
use crate::{LineRange, SnipError};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn snip(list: &[&str]) -> SnipConfig {
    match parse_args(&args(list), None).unwrap() {
        Command::Snip(config) => config,
        Command::Help => panic!("expected a snip command for {list:?}"),
    }
}

fn usage_error(list: &[&str]) -> String {
    match parse_args(&args(list), None) {
        Err(SnipError::Usage(message)) => message,
        other => panic!("expected a usage error for {list:?}, got {other:?}"),
    }
}

// === Defaults ===

#[test]
fn file_alone_uses_defaults() {
    let config = snip(&["main.c"]);
    assert_eq!(
        config,
        SnipConfig {
            path: PathBuf::from("main.c"),
            ..SnipConfig::default()
        }
    );
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.font, PathBuf::from(DEFAULT_FONT));
    assert_eq!(config.tab_width, 4);
    assert!((config.render.font_size - 24.0).abs() < f32::EPSILON);
}

#[test]
fn second_positional_is_the_range() {
    let config = snip(&["main.c", "3-9"]);
    assert_eq!(config.range, Some(LineRange::new(3, 9)));
}

// === Options ===

#[test]
fn value_flags_take_the_next_argument() {
    let config = snip(&[
        "-o",
        "out.png",
        "main.c",
        "--font",
        "mono.ttf",
        "--size",
        "18",
        "--tab-width",
        "8",
        "--theme",
        "light",
        "--tokens",
    ]);
    assert_eq!(config.output, PathBuf::from("out.png"));
    assert_eq!(config.font, PathBuf::from("mono.ttf"));
    assert!((config.render.font_size - 18.0).abs() < f32::EPSILON);
    assert_eq!(config.tab_width, 8);
    assert_eq!(config.theme, Theme::light());
    assert!(config.dump_tokens);
}

#[test]
fn value_flags_accept_inline_values() {
    let config = snip(&["main.c", "--output=x.png", "--theme=light", "--size=12.5"]);
    assert_eq!(config.output, PathBuf::from("x.png"));
    assert_eq!(config.theme, Theme::light());
    assert!((config.render.font_size - 12.5).abs() < f32::EPSILON);
}

#[test]
fn font_env_overrides_default_and_flag_overrides_env() {
    let from_env = parse_args(&args(&["a.c"]), Some(PathBuf::from("env.ttf"))).unwrap();
    let Command::Snip(config) = from_env else {
        panic!("expected a snip command");
    };
    assert_eq!(config.font, PathBuf::from("env.ttf"));

    let with_flag = parse_args(
        &args(&["a.c", "--font", "flag.ttf"]),
        Some(PathBuf::from("env.ttf")),
    )
    .unwrap();
    let Command::Snip(config) = with_flag else {
        panic!("expected a snip command");
    };
    assert_eq!(config.font, PathBuf::from("flag.ttf"));
}

#[test]
fn help_wins_over_everything() {
    assert_eq!(parse_args(&args(&["-h"]), None).unwrap(), Command::Help);
    assert_eq!(
        parse_args(&args(&["main.c", "--help"]), None).unwrap(),
        Command::Help
    );
}

// === Errors ===

#[test]
fn missing_file_is_a_usage_error() {
    assert_eq!(usage_error(&[]), "missing file path");
    assert_eq!(usage_error(&["--tokens"]), "missing file path");
}

#[test]
fn missing_value_is_a_usage_error() {
    assert_eq!(usage_error(&["main.c", "-o"]), "missing value for '-o'");
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(usage_error(&["main.c", "--color"]), "unknown option '--color'");
}

#[test]
fn third_positional_is_rejected() {
    assert_eq!(
        usage_error(&["main.c", "1-2", "extra"]),
        "unexpected argument 'extra'"
    );
}

#[test]
fn invalid_numbers_are_rejected() {
    assert_eq!(usage_error(&["a.c", "--size", "0"]), "invalid font size '0'");
    assert_eq!(usage_error(&["a.c", "--size", "big"]), "invalid font size 'big'");
    assert_eq!(usage_error(&["a.c", "--tab-width", "0"]), "invalid tab width '0'");
}

#[test]
fn unknown_theme_is_rejected() {
    assert_eq!(usage_error(&["a.c", "--theme", "neon"]), "unknown theme 'neon'");
}

#[test]
fn malformed_range_is_reported() {
    let result = parse_args(&args(&["a.c", "ten-twenty"]), None);
    assert!(matches!(result, Err(SnipError::MalformedRange { .. })));
}
