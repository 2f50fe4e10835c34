use std::ops::Deref;

// region ArgName
/// Simple wrapper around a collection of strings.
/// Can be constructed automatically from &str & Vec<&str>.
/// Useful to handle args which can have multiple names and those which can have no more than one name.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}
impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve value associated to an arg passed to the app,
/// written either as `name=value` or as `name value`.
/// The first matching arg wins.
pub fn retrieve_arg_value<'a, A>(args: &[String], arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        for arg_name in arg_names.iter() {
            if arg == arg_name {
                return args.next().cloned();
            }
            let arg_prefix = format!("{arg_name}=");
            if arg.starts_with(&arg_prefix) {
                return arg.split_once("=").map(|(_, l)| l.to_owned());
            }
        }
    }

    None
}

/// Whether a value-less flag such as `--dry-run` is present.
pub fn has_flag<'a, A>(args: &[String], arg_names: A) -> bool
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    args.iter()
        .any(|arg| arg_names.iter().any(|arg_name| arg == arg_name))
}

/// Args that are neither flags nor options with their value.
/// `value_arg_names` lists the options whose value may be the next arg.
/// The first arg is the program name and is skipped.
pub fn retrieve_positional_args<'a>(args: &'a [String], value_arg_names: &[&str]) -> Vec<&'a str> {
    let mut positional_args = vec![];
    let mut args = args.iter().skip(1).map(String::as_str);
    while let Some(arg) = args.next() {
        if value_arg_names.contains(&arg) {
            args.next();
        } else if !arg.starts_with('-') {
            positional_args.push(arg);
        }
    }

    positional_args
}

#[cfg(test)]
pub mod tests {
    use parameterized::{ide, parameterized};

    use crate::tools::env_args::{has_flag, retrieve_arg_value, retrieve_positional_args};

    ide!();

    #[parameterized(
        args = {vec!["-l=test_login".to_owned()], vec!["--login=test_login".to_owned()], vec!["-p=test_password".to_owned()], vec!["--password=test_password".to_owned()], vec!["--another-arg=wrong".to_owned()]},
        arg_names = {vec!["-l", "--login"], vec!["-l", "--login"], vec!["-p", "--password"], vec!["-p", "--password"], vec!["-p", "--password"]},
        expected_result = {Some("test_login".to_owned()), Some("test_login".to_owned()), Some("test_password".to_owned()), Some("test_password".to_owned()), None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_names: Vec<&str>,
        expected_result: Option<String>,
    ) {
        let result = retrieve_arg_value(&args, arg_names);
        assert_eq!(expected_result, result);
    }

    #[parameterized(
        args = {
            vec!["-l".to_owned(), "list.csv".to_owned()],
            vec!["--login".to_owned(), "list.csv".to_owned(), "-l=other.csv".to_owned()],
            vec!["-l".to_owned()],
        },
        expected_result = {Some("list.csv".to_owned()), Some("list.csv".to_owned()), None}
    )]
    fn should_retrieve_arg_value_from_next_arg(args: Vec<String>, expected_result: Option<String>) {
        let result = retrieve_arg_value(&args, vec!["-l", "--login"]);
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_keep_equal_signs_in_value() {
        let args = vec!["--smtp-password=a=b".to_owned()];

        let result = retrieve_arg_value(&args, "--smtp-password");

        assert_eq!(Some("a=b".to_owned()), result);
    }

    #[parameterized(
        args = {vec!["--dry-run".to_owned()], vec!["--dry-run=yes".to_owned()], vec![]},
        expected_result = {true, false, false}
    )]
    fn should_detect_flag(args: Vec<String>, expected_result: bool) {
        assert_eq!(expected_result, has_flag(&args, "--dry-run"));
    }

    #[test]
    fn should_retrieve_positional_args() {
        let args = vec![
            "mail-merge".to_owned(),
            "-l=list.csv".to_owned(),
            "template.txt".to_owned(),
            "--dry-run".to_owned(),
        ];

        let result = retrieve_positional_args(&args, &["-l"]);

        assert_eq!(vec!["template.txt"], result);
    }

    #[test]
    fn should_skip_values_of_options_in_positional_args() {
        let args = vec![
            "mail-merge".to_owned(),
            "-l".to_owned(),
            "list.csv".to_owned(),
            "--dry-run".to_owned(),
            "template.txt".to_owned(),
        ];

        let result = retrieve_positional_args(&args, &["-l", "--recipients"]);

        assert_eq!(vec!["template.txt"], result);
    }
}
