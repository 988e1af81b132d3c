/// Extracts the directory name to exclude from a `NAME=VALUE` argument.
///
/// Everything after the first `=` is the name. An argument without `=`, or
/// with nothing after it, excludes nothing.
pub fn exclusion_from_argument(argument: &str) -> Option<String> {
    argument
        .split_once('=')
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
