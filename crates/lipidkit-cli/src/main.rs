use indexmap::IndexMap;
use lipidkit_core::{
    CHROM_MARKER, ConstructKey, DEFAULT_SUFFIX, NameSource, build_allowed_set, header,
    match_indexed_sources, normalize, strip_marker,
};
use narwhal::{GridSpec, Layout, Size};
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Layout(narwhal::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Normalize,
    Headers,
    Match,
    Layout,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    pretty: bool,
}

/// Input of `match`: plot file stems plus the tables that decide their order.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchJob {
    suffix: String,
    /// Trailing marker stripped from every item stem before normalization.
    marker: String,
    /// Drop items no source mentions.
    filter: bool,
    items: Vec<String>,
    sources: Vec<NameSource>,
}

impl Default for MatchJob {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            marker: CHROM_MARKER.to_string(),
            filter: true,
            items: Vec::new(),
            sources: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchOut {
    key: String,
    item: String,
    raw: String,
    source: Option<String>,
}

#[derive(Debug, Serialize)]
struct HeadersOut {
    constructs: Vec<String>,
    /// Constructs recorded against a second time column.
    alternate_time: Vec<String>,
}

/// Input of `layout`. Non-empty `sections` take precedence over `items`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutJob {
    grid: GridSpec,
    items: Vec<Size>,
    sections: Vec<Vec<Size>>,
}

fn usage() -> &'static str {
    "lipidkit-cli\n\
\n\
USAGE:\n\
  lipidkit-cli [normalize] [--pretty] [--out <path>] [<path>|-]\n\
  lipidkit-cli headers [--pretty] [--out <path>] [<path>|-]\n\
  lipidkit-cli match [--pretty] [--out <path>] [<path>|-]\n\
  lipidkit-cli layout [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - normalize reads one raw construct name per line and prints their keys.\n\
  - headers reads a CSV export and prints the construct names of its header line,\n\
    plus the ones recorded against a second time column.\n\
  - match reads a JSON job {items, sources, suffix?, marker?, filter?} and prints the ordered items.\n\
  - layout reads a JSON job {grid, items | sections} and prints placements per canvas.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "normalize" => args.command = Command::Normalize,
            "headers" => args.command = Command::Headers,
            "match" => args.command = Command::Match,
            "layout" => args.command = Command::Layout,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run_match(job: MatchJob) -> Vec<MatchOut> {
    // Later stems win when two normalize to the same key.
    let mut stems: IndexMap<String, String> = IndexMap::new();
    for stem in &job.items {
        stems.insert(normalize(&strip_marker(stem, &job.marker)), stem.clone());
    }

    if job.filter {
        let allowed = build_allowed_set(job.sources.iter().map(|s| &s.names), &job.suffix);
        if !allowed.is_empty() {
            stems.retain(|key, _| allowed.contains(key));
        }
    }

    match_indexed_sources(&stems, &job.sources, &job.suffix)
        .into_iter()
        .map(|m| MatchOut {
            item: stems.get(&m.key).cloned().unwrap_or_else(|| m.raw.clone()),
            key: m.key,
            raw: m.raw,
            source: m.source,
        })
        .collect()
}

fn run_layout(job: LayoutJob) -> Result<Layout, CliError> {
    if job.sections.is_empty() {
        Ok(narwhal::place_items(&job.items, &job.grid)?)
    } else {
        Ok(narwhal::place_sections(&job.sections, &job.grid)?)
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let out = args.out.as_deref();

    match args.command {
        Command::Normalize => {
            let keys: Vec<ConstructKey> = text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(ConstructKey::new)
                .collect();
            write_json(&keys, args.pretty, out)
        }
        Command::Headers => {
            let first = text.lines().next().unwrap_or_default();
            let headers = HeadersOut {
                constructs: header::construct_headers(first),
                alternate_time: header::alternate_time_columns(first),
            };
            write_json(&headers, args.pretty, out)
        }
        Command::Match => {
            let job: MatchJob = serde_json::from_str(&text)?;
            write_json(&run_match(job), args.pretty, out)
        }
        Command::Layout => {
            let job: LayoutJob = serde_json::from_str(&text)?;
            write_json(&run_layout(job)?, args.pretty, out)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
