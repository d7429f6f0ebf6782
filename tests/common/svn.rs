use derive_new::new;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const ARGS_FILE: &str = "svn-args.txt";
const LOG_FILE: &str = "svn-log.xml";

#[derive(Debug, Clone, new)]
pub struct LogEntrySpec {
    pub revision: u64,
    pub author: String,
    pub message: String,
    pub paths: Vec<(String, String)>,
}

impl LogEntrySpec {
    pub fn simple(revision: u64, author: &str, message: &str) -> Self {
        LogEntrySpec::new(
            revision,
            author.to_string(),
            message.to_string(),
            vec![("M".to_string(), format!("/trunk/file{revision}.c"))],
        )
    }

    fn to_xml(&self) -> String {
        let paths = self
            .paths
            .iter()
            .map(|(action, path)| {
                format!("<path\n   kind=\"file\"\n   action=\"{action}\">{path}</path>\n")
            })
            .collect::<String>();

        format!(
            "<logentry\n   revision=\"{}\">\n<author>{}</author>\n<date>2015-03-{:02}T16:05:12.000000Z</date>\n<paths>\n{}</paths>\n<msg>{}</msg>\n</logentry>\n",
            self.revision,
            self.author,
            (self.revision % 28) + 1,
            paths,
            self.message
        )
    }
}

/// `svn log --xml -v` output, entries in the order given
pub fn log_xml(entries: &[LogEntrySpec]) -> String {
    let body = entries.iter().map(LogEntrySpec::to_xml).collect::<String>();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<log>\n{body}</log>\n")
}

/// A fake `svn` that records its arguments and prints a canned log
#[derive(Debug, Clone)]
pub struct SvnStub {
    dir: PathBuf,
}

impl SvnStub {
    pub fn succeeding(dir: &Path, xml: &str) -> Self {
        std::fs::write(dir.join(LOG_FILE), xml).expect("Failed to write log fixture");
        Self::install(
            dir,
            &format!("cat '{}'\nexit 0", dir.join(LOG_FILE).display()),
        )
    }

    pub fn failing(dir: &Path, message: &str, code: i32) -> Self {
        Self::install(
            dir,
            &format!("echo 'svn: warning: W170000: retrying' >&2\necho '{message}' >&2\nexit {code}"),
        )
    }

    fn install(dir: &Path, body: &str) -> Self {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{body}\n",
            dir.join(ARGS_FILE).display()
        );
        let path = dir.join("svn");
        std::fs::write(&path, script).expect("Failed to write svn stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make svn stub executable");

        SvnStub {
            dir: dir.to_path_buf(),
        }
    }

    pub fn binary(&self) -> PathBuf {
        self.dir.join("svn")
    }

    /// Arguments of the last invocation, one per line
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.join(ARGS_FILE))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
