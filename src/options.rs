use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;

pub mod defaults {
    pub const PROFILE: &str = "sandbox";
    pub const DURATION_SECONDS: i32 = 28800; // 8 hours
}

/// Raw command line surface. Every flag is optional at this layer so that
/// requiredness is owned by [`Options::resolve`], which reports all missing
/// options at once instead of stopping at the first.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Local long-term credential profile to authenticate with
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Region to write into the config file's default section
    #[arg(short, long)]
    pub region: Option<String>,

    /// Numeric account identifier for the MFA device ARN
    #[arg(short, long)]
    pub account: Option<u64>,

    /// Username for the MFA device ARN
    #[arg(short, long)]
    pub username: Option<String>,

    /// Current code from the MFA device
    #[arg(short, long)]
    pub token: Option<String>,

    /// Directory containing the credentials and config files
    #[arg(short = 'f', long = "aws_dir")]
    pub aws_dir: Option<PathBuf>,

    /// Requested session lifetime in seconds
    #[arg(short, long)]
    pub duration: Option<i32>,
}

impl Args {
    fn supplied(&self, name: &str) -> bool {
        match name {
            "profile" => self.profile.is_some(),
            "region" => self.region.is_some(),
            "account" => self.account.is_some(),
            "username" => self.username.is_some(),
            "token" => self.token.is_some(),
            "aws_dir" => self.aws_dir.is_some(),
            "duration" => self.duration.is_some(),
            _ => unreachable!("unknown option name: {}", name),
        }
    }
}

/// One option as the validator sees it: the flag name and whether a missing
/// value is filled from a default instead of being reported.
pub struct OptionDef {
    pub name: &'static str,
    pub has_default: bool,
}

/// Declaration order here is the order missing options are reported in.
pub const OPTION_DEFS: &[OptionDef] = &[
    OptionDef { name: "profile", has_default: true },
    OptionDef { name: "region", has_default: false },
    OptionDef { name: "account", has_default: false },
    OptionDef { name: "username", has_default: false },
    OptionDef { name: "token", has_default: false },
    OptionDef { name: "aws_dir", has_default: true },
    OptionDef { name: "duration", has_default: true },
];

/// The resolved configuration for one invocation. Built once at startup,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Options {
    pub profile: String,
    pub region: String,
    pub account: u64,
    pub username: String,
    pub token: String,
    pub aws_dir: PathBuf,
    pub duration_seconds: i32,
}

impl Options {
    /// Validate the parsed arguments against [`OPTION_DEFS`] and fill in
    /// defaults. Collects every violation into a single multi-line
    /// [`Error::Validation`], one `--<name> is required` line per missing
    /// option, in definition order.
    pub fn resolve(args: Args) -> Result<Options, Error> {
        let missing = OPTION_DEFS
            .iter()
            .filter(|def| !def.has_default && !args.supplied(def.name))
            .map(|def| format!("--{} is required", def.name))
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(Error::Validation(missing.join("\n")));
        }

        let aws_dir = match args.aws_dir.or_else(default_aws_dir) {
            Some(dir) => dir,
            // The default is derived from the home directory; without one
            // the option effectively has no default.
            None => return Err(Error::Validation("--aws_dir is required".to_string())),
        };

        let (Some(region), Some(account), Some(username), Some(token)) =
            (args.region, args.account, args.username, args.token)
        else {
            unreachable!("required options are checked against OPTION_DEFS above");
        };

        Ok(Options {
            profile: args
                .profile
                .unwrap_or_else(|| defaults::PROFILE.to_string()),
            region,
            account,
            username,
            token,
            aws_dir,
            duration_seconds: args.duration.unwrap_or(defaults::DURATION_SECONDS),
        })
    }
}

fn default_aws_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aws"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> Args {
        Args {
            profile: Some("demo".to_string()),
            region: Some("eu-west-1".to_string()),
            account: Some(123456789012),
            username: Some("alice".to_string()),
            token: Some("123456".to_string()),
            aws_dir: Some(PathBuf::from("/tmp/aws")),
            duration: Some(3600),
        }
    }

    #[test]
    fn reports_every_missing_required_option_in_definition_order() {
        let args = Args {
            profile: Some("demo".to_string()),
            ..Args::default()
        };

        let err = Options::resolve(args).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "--region is required\n\
             --account is required\n\
             --username is required\n\
             --token is required"
        );
    }

    #[test]
    fn reports_only_the_missing_option() {
        let args = Args {
            token: None,
            ..full_args()
        };

        let err = Options::resolve(args).unwrap_err();
        assert_eq!(err.to_string(), "--token is required");
    }

    #[test]
    fn passes_supplied_values_through_unchanged() {
        let options = Options::resolve(full_args()).unwrap();
        assert_eq!(options.profile, "demo");
        assert_eq!(options.region, "eu-west-1");
        assert_eq!(options.account, 123456789012);
        assert_eq!(options.username, "alice");
        assert_eq!(options.token, "123456");
        assert_eq!(options.aws_dir, PathBuf::from("/tmp/aws"));
        assert_eq!(options.duration_seconds, 3600);
    }

    #[test]
    fn fills_defaults_for_profile_and_duration() {
        let args = Args {
            profile: None,
            duration: None,
            ..full_args()
        };

        let options = Options::resolve(args).unwrap();
        assert_eq!(options.profile, defaults::PROFILE);
        assert_eq!(options.duration_seconds, defaults::DURATION_SECONDS);
    }

    #[test]
    fn definitions_cover_the_whole_surface() {
        // Each flag on `Args` must be visible to the validator.
        for def in OPTION_DEFS {
            let _ = Args::default().supplied(def.name);
        }
        assert_eq!(OPTION_DEFS.len(), 7);
    }
}
