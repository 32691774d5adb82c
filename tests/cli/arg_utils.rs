// Integration tests for cli/arg_utils.rs — argument-parsing helpers

use libzip::cli::arg_utils::{last_name_from_path, long_command_w_arg, read_u32_from_str};

#[test]
fn last_name_from_path_mixed_separators() {
    assert_eq!(last_name_from_path("a/b\\c"), "c");
    assert_eq!(last_name_from_path("/usr/bin/libzip"), "libzip");
    assert_eq!(last_name_from_path(""), "");
}

#[test]
fn read_u32_leaves_remainder() {
    assert_eq!(read_u32_from_str("16,rest"), Some((16, ",rest")));
    assert_eq!(read_u32_from_str("0"), Some((0, "")));
    assert_eq!(read_u32_from_str("-1"), None);
}

#[test]
fn long_command_prefix() {
    assert_eq!(long_command_w_arg("--threads=8", "--threads"), Some("=8"));
    assert_eq!(long_command_w_arg("--threads", "--threads"), Some(""));
    assert_eq!(long_command_w_arg("--thread", "--threads"), None);
}
