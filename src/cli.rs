use oid_converter::print::HexStyle;
use oid_converter::{OidError, OidKind};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// OID encoder/decoder, arcs of unlimited size
///
/// Converts the dotted form to ASCII HEX DER output, or (with -x) decodes ASCII HEX DER and gives
/// the dotted form.
#[derive(clap::Parser, Debug)]
#[command(name = "oid", version, about, long_about = None)]
pub struct Parameters {
    /// Decode hex input (plain, C array or C string) to dotted form
    #[arg(short = 'x', conflicts_with_all = ["c_array", "c_string", "relative"])]
    pub decode: bool,
    /// Output as C syntax (array)
    #[arg(short = 'c', conflicts_with = "c_string")]
    pub c_array: bool,
    /// Output as C syntax (string)
    #[arg(short = 'C')]
    pub c_string: bool,
    /// Handle the OID as relative and not absolute
    #[arg(short = 'r')]
    pub relative: bool,
    /// Write the output to this file instead of stdout
    #[arg(short = 'o', value_name = "OUTFILE")]
    pub output: Option<PathBuf>,
    /// Read the input from this file
    #[arg(short = 'i', value_name = "INFILE", conflicts_with = "values")]
    pub input: Option<PathBuf>,
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// OID in dotted form (e.g. 2.999.1, RELATIVE.3.8571), or hex digits with -x
    #[arg(value_name = "INPUT")]
    pub values: Vec<String>,
}

impl Parameters {
    pub fn style(&self) -> HexStyle {
        if self.c_array {
            HexStyle::CArray
        } else if self.c_string {
            HexStyle::CString
        } else {
            HexStyle::Plain
        }
    }

    /// Kind used when the dotted form has no `ABSOLUTE.`/`RELATIVE.` prefix
    pub fn default_kind(&self) -> OidKind {
        if self.relative {
            OidKind::Relative
        } else {
            OidKind::Absolute
        }
    }

    /// Join positional arguments: with dots when encoding, without separator when decoding
    pub fn joined_values(&self) -> String {
        if self.decode {
            self.values.concat()
        } else {
            self.values.join(".")
        }
    }
}

/// Reasons for the tool to stop, each with its exit code
#[derive(Debug)]
pub enum Failure {
    Usage(&'static str),
    Input(PathBuf, io::Error),
    Output(PathBuf, io::Error),
    Convert(OidError),
}

impl Failure {
    pub fn exit_code(&self) -> i32 {
        match self {
            Failure::Usage(_) => 1,
            Failure::Input(..) => 11,
            Failure::Output(..) => 33,
            Failure::Convert(e) => e.exit_code(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Usage(msg) => f.write_str(msg),
            Failure::Input(path, e) => {
                write!(f, "Unable to open input file {}: {}", path.display(), e)
            }
            Failure::Output(path, e) => {
                write!(f, "Unable to open output file {}: {}", path.display(), e)
            }
            Failure::Convert(e) => write!(f, "{}", e),
        }
    }
}

impl From<OidError> for Failure {
    fn from(e: OidError) -> Self {
        Failure::Convert(e)
    }
}

/// Input text: the whole file when decoding, its first line when encoding, else the arguments
pub fn read_input(params: &Parameters) -> Result<String, Failure> {
    match &params.input {
        Some(path) => {
            let data = fs::read(path).map_err(|e| Failure::Input(path.clone(), e))?;
            let text = String::from_utf8_lossy(&data);
            if params.decode {
                Ok(text.into_owned())
            } else {
                Ok(text.lines().next().unwrap_or("").to_owned())
            }
        }
        None if params.values.is_empty() => Err(Failure::Usage(
            "No input given. Use --help for usage information.",
        )),
        None => Ok(params.joined_values()),
    }
}

/// Write one line of output to the `-o` file, or to stdout
pub fn write_output(params: &Parameters, output: &str) -> Result<(), Failure> {
    match &params.output {
        Some(path) => {
            let mut file = fs::File::create(path).map_err(|e| Failure::Output(path.clone(), e))?;
            writeln!(file, "{}", output).map_err(|e| Failure::Output(path.clone(), e))
        }
        None => {
            println!("{}", output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn params_for(args: &[&str]) -> Parameters {
        Parameters::try_parse_from(args).expect("parsing failed")
    }

    #[test]
    fn test_parse_encode_flags() {
        let params = Parameters::try_parse_from(&["oid", "-c", "-r", "2", "999"])
            .expect("parsing failed");
        assert_eq!(params.style(), HexStyle::CArray);
        assert_eq!(params.default_kind(), OidKind::Relative);
        assert_eq!(params.joined_values(), "2.999");
    }

    #[test]
    fn test_parse_decode_flags() {
        let params = Parameters::try_parse_from(&["oid", "-x", "06 02", "88 37"])
            .expect("parsing failed");
        assert!(params.decode);
        assert_eq!(params.joined_values(), "06 0288 37");
    }

    #[test]
    fn test_parse_files() {
        let params = Parameters::try_parse_from(&["oid", "-x", "-iin.txt", "-o", "out.txt"])
            .expect("parsing failed");
        assert_eq!(params.input, Some(PathBuf::from("in.txt")));
        assert_eq!(params.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_parse_conflicts() {
        assert!(Parameters::try_parse_from(&["oid", "-x", "-c", "0602"]).is_err());
        assert!(Parameters::try_parse_from(&["oid", "-c", "-C", "2.999"]).is_err());
        assert!(Parameters::try_parse_from(&["oid", "-i", "f", "2.999"]).is_err());
    }

    #[test]
    fn test_failure_exit_codes() {
        assert_eq!(Failure::Usage("no input").exit_code(), 1);
        assert_eq!(
            Failure::from(OidError::TopArcOutOfRange).exit_code(),
            OidError::TopArcOutOfRange.exit_code()
        );
    }

    #[test]
    fn test_read_input_first_line_when_encoding() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("in.txt");
        fs::write(&path, "2.999.1\n1.3.6.1\n").expect("write failed");
        let arg = format!("-i{}", path.display());
        let input = read_input(&params_for(&["oid", &arg])).expect("read failed");
        assert_eq!(input, "2.999.1");
    }

    #[test]
    fn test_read_input_whole_file_when_decoding() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("in.txt");
        fs::write(&path, "06 02\n88 37\n").expect("write failed");
        let arg = format!("-i{}", path.display());
        let input = read_input(&params_for(&["oid", "-x", &arg])).expect("read failed");
        assert_eq!(input, "06 02\n88 37\n");
        assert_eq!(
            oid_converter::decode_hex(&input).map(|oid| oid.labelled()),
            Ok("ABSOLUTE OID 2.999".to_owned())
        );
    }

    #[test]
    fn test_read_input_arguments() {
        let input = read_input(&params_for(&["oid", "2", "999"])).expect("read failed");
        assert_eq!(input, "2.999");
        let failure = read_input(&params_for(&["oid"])).expect_err("no input must fail");
        assert_eq!(failure.exit_code(), 1);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing.txt");
        let arg = format!("-i{}", path.display());
        let failure = read_input(&params_for(&["oid", &arg])).expect_err("missing file must fail");
        assert!(matches!(failure, Failure::Input(..)));
        assert_eq!(failure.exit_code(), 11);
    }

    #[test]
    fn test_write_output_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        let arg = format!("-o{}", path.display());
        write_output(&params_for(&["oid", &arg, "2.999"]), "06 02 88 37").expect("write failed");
        let written = fs::read_to_string(&path).expect("read failed");
        assert_eq!(written, "06 02 88 37\n");
    }

    #[test]
    fn test_write_output_unwritable() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("no-such-dir").join("out.txt");
        let arg = format!("-o{}", path.display());
        let failure = write_output(&params_for(&["oid", &arg, "2.999"]), "06 02 88 37")
            .expect_err("missing directory must fail");
        assert!(matches!(failure, Failure::Output(..)));
        assert_eq!(failure.exit_code(), 33);
    }
}
