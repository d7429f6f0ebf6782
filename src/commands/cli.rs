use crate::artifacts::format::DEFAULT_FORMAT;
use crate::artifacts::options::spec::OptionSpecs;

pub const PROGRAM: &str = "slog";
/// Fetch window in days; 0 means no window
pub const DEFAULT_DAYS: u64 = 0;
/// Commits transferred from the server; 0 means no limit
pub const DEFAULT_LIMIT: u64 = 2000;
/// `--regex` values may contain commas, so repeated occurrences are only
/// split on line breaks
const REGEX_DELIMITER: &str = "\n";

const ABOUT: &str = "Wrapper around the svn log command line tool that provides \
    additional filtering capabilities such as filtering by regex and author.";

pub fn slog_options() -> OptionSpecs {
    OptionSpecs::builder(PROGRAM)
        .about(ABOUT)
        .array(
            'a',
            "author",
            "Only show commits written by author. Set repeatedly to cast a larger net.",
            ",",
        )
        .flag('c', "color", "Use color to style output.")
        .value(
            'd',
            "days",
            &format!(
                "Number of days of data to fetch. Set --days=0 to remove limit. Default is {DEFAULT_DAYS}."
            ),
        )
        .flag('D', "debug", "Print debugging information.")
        .array(
            'e',
            "regex",
            "Only show commits that match regex (e.g., /component/i). Set repeatedly to \
             narrow the selection: every regex must match.",
            REGEX_DELIMITER,
        )
        .value(
            'f',
            "format",
            &format!(
                "Format type: summary, shortsummary, oneline.\nDefault is {DEFAULT_FORMAT}."
            ),
        )
        .flag(
            'F',
            "follow-copies",
            "Follow copies (i.e., follow the commit history all the way to the origin \
             branch). Default is to only follow commits on the current branch.",
        )
        .flag('h', "help", "Show usage.")
        .array(
            'i',
            "ignore",
            "Exclude commits written by author. Set this repeatedly to cast a larger net.",
            ",",
        )
        .value(
            'l',
            "limit",
            &format!(
                "Limit the number of commits that are transferred from the server (default \
                 is {DEFAULT_LIMIT}). This improves performance by limiting the amount of data \
                 that SVN sends over. However, note that filters like --regex and --author are \
                 evaluated on the limited commit log that is received from the server. This \
                 means that setting the limit to 10 and then also applying an --author filter \
                 is likely to print less than 10 commits. Set --limit=0 to remove the limit."
            ),
        )
        .value(
            'o',
            "repo",
            &format!(
                "SVN repository, e.g., http://svn.host.com/project.\nOtherwise if the current \
                 directory is an SVN working copy, the working copy's repo will be used.\n\
                 Otherwise if the environment variable {} is set, it will be used.",
                crate::areas::repository::REPO_ENV_VAR
            ),
        )
        .flag('R', "reverse", "Print the most recent commits first.")
        .flag('v', "verbose", "Same as --debug.")
        .build()
}
