use crate::areas::repository::RepositoryLocator;
use crate::areas::svn::{LogRequest, SvnClient};
use crate::artifacts::format::{DEFAULT_FORMAT, Format, FormatOptions};
use crate::artifacts::log::commit::Commit;
use crate::artifacts::log::filter::{FilterCriteria, filter_batch};
use crate::artifacts::options::parser::ParsedOptions;
use crate::artifacts::options::spec::OptionSpecs;
use crate::commands::cli::{DEFAULT_DAYS, DEFAULT_LIMIT};
use crate::errors::SlogError;
use std::io::Write;
use tracing::debug;

/// Everything one `slog` invocation needs, read from the command line
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub repo: Option<String>,
    pub days: u64,
    pub limit: u64,
    pub debug: bool,
    pub authors: Vec<String>,
    pub ignore: Vec<String>,
    pub regexes: Vec<String>,
    pub follow_copies: bool,
    pub format: Format,
    pub color: bool,
    pub reverse: bool,
    /// Tokens no option matched, forwarded to `svn log`
    pub passthrough: Vec<String>,
}

fn number(parsed: &ParsedOptions, option: &str, default: u64) -> Result<u64, SlogError> {
    match parsed.value(option) {
        None => Ok(default),
        Some(value) => value.parse::<u64>().map_err(|_| SlogError::InvalidNumber {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}

impl TryFrom<&ParsedOptions> for LogOptions {
    type Error = SlogError;

    fn try_from(parsed: &ParsedOptions) -> Result<Self, Self::Error> {
        Ok(LogOptions {
            repo: parsed.value("repo").map(str::to_string),
            days: number(parsed, "days", DEFAULT_DAYS)?,
            limit: number(parsed, "limit", DEFAULT_LIMIT)?,
            debug: parsed.is_set("debug") || parsed.is_set("verbose"),
            authors: parsed.values("author").to_vec(),
            ignore: parsed.values("ignore").to_vec(),
            regexes: parsed.values("regex").to_vec(),
            follow_copies: parsed.is_set("follow-copies"),
            format: Format::from_name(parsed.value("format").unwrap_or(DEFAULT_FORMAT))?,
            color: parsed.is_set("color"),
            reverse: parsed.is_set("reverse"),
            passthrough: parsed
                .passthrough_args()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}

impl LogOptions {
    pub fn criteria(&self) -> Result<FilterCriteria, SlogError> {
        let mut criteria = FilterCriteria::new();
        criteria
            .allow_authors(&self.authors)
            .deny_authors(&self.ignore);
        for regex in &self.regexes {
            criteria.match_regex(regex)?;
        }

        Ok(criteria)
    }

    pub fn request(&self, repo: String) -> LogRequest {
        LogRequest::new(
            repo,
            self.days,
            self.limit,
            !self.follow_copies,
            self.passthrough.clone(),
        )
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.color, self.reverse)
    }
}

/// Fetch, filter and render the log of one repository
pub struct LogCommand {
    options: LogOptions,
    client: SvnClient,
    writer: Box<dyn Write>,
}

impl LogCommand {
    pub fn new(options: LogOptions, client: SvnClient, writer: Box<dyn Write>) -> Self {
        LogCommand {
            options,
            client,
            writer,
        }
    }

    /// Applies `criteria` to a fetched batch
    pub fn select(&self, commits: Vec<Commit>, criteria: &FilterCriteria) -> Vec<Commit> {
        let fetched = commits.len();
        let selected = filter_batch(commits, criteria);
        debug!(
            "{} of {} commits passed {} pattern(s)",
            selected.len(),
            fetched,
            criteria.patterns().len()
        );

        selected
    }

    pub fn render(&mut self, commits: &[Commit]) -> anyhow::Result<()> {
        if self.options.color {
            colored::control::set_override(true);
        }
        let formatter = self.options.format.formatter(self.options.format_options());

        self.writer.write_all(formatter.format(commits).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, repo: String) -> anyhow::Result<()> {
        // Patterns are compiled before the fetch so a typo fails fast
        let criteria = self.options.criteria()?;

        let request = self.options.request(repo);
        let commits = self.client.log(&request)?;
        let selected = self.select(commits, &criteria);

        self.render(&selected)
    }
}

/// Runs one invocation against already parsed options
pub fn run(specs: &OptionSpecs, parsed: &ParsedOptions, mut writer: Box<dyn Write>) -> anyhow::Result<()> {
    if parsed.is_set("help") {
        writer.write_all(specs.usage().as_bytes())?;
        writer.flush()?;
        return Ok(());
    }

    let options = LogOptions::try_from(parsed)?;
    debug!("options: {:?}", options);

    let repo = RepositoryLocator::from_env(options.repo.as_deref())?.resolve()?;
    debug!("repository: {}", repo);
    let client = SvnClient::from_env()?;

    LogCommand::new(options, client, writer).execute(repo)
}
