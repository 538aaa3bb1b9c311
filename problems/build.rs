use std::{
    env,
    error::Error,
    fs::{self, File},
    io::Write,
    path::PathBuf,
    process,
};

struct ProblemDef {
    /// The code that users know this as. This should remain stable
    /// between releases to facilitate consistent documentation.
    code: String,
    /// The internal name that this problem is known as.
    name: String,
    /// Severity is fixed per code and never inferred at the call site.
    severity: String,
    /// A message describing the problem.
    message: String,
}

fn create_problems() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=resources/problem-codes.csv");

    let mut src_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    src_path.push("resources");
    src_path.push("problem-codes.csv");

    let src = fs::read_to_string(src_path).expect("Unable to read 'problem-codes.csv'");
    let src = src.as_bytes();

    let mut defs = vec![];
    let mut rdr = csv::Reader::from_reader(src);
    for result in rdr.records() {
        let record = result?;
        let code = record
            .get(0)
            .ok_or_else(|| format!("Record {:?} is not valid at column 0", record))?;
        let name = record
            .get(1)
            .ok_or_else(|| format!("Record {:?} is not valid at column 1", record))?;
        let severity = record
            .get(2)
            .ok_or_else(|| format!("Record {:?} is not valid at column 2", record))?;
        let message = record
            .get(3)
            .ok_or_else(|| format!("Record {:?} is not valid at column 3", record))?;
        defs.push(ProblemDef {
            code: code.to_string(),
            name: name.to_string(),
            severity: severity.to_string(),
            message: message.to_string(),
        });
    }

    let mut out_path = PathBuf::from(env::var("OUT_DIR")?);
    fs::create_dir_all(out_path.clone())
        .map_err(|e| format!("Unable to create directory 'problems': {}", e))?;

    out_path.push("problems.rs");
    let mut out =
        File::create(out_path).map_err(|e| format!("Unable to create 'problems.rs': {}", e))?;

    out.write_all(b"/// Star-Code problem codes, generated from `resources/problem-codes.csv`.\n")?;
    out.write_all(b"#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n")?;
    out.write_all(b"pub enum Problem {\n")?;
    for def in &defs {
        out.write_all(format!("    {},\n", def.name).as_bytes())?;
    }
    out.write_all(b"}\n\n")?;

    out.write_all(b"impl Problem {\n")?;

    out.write_all(b"    /// Returns the stable code for this problem, e.g. \"SC010\".\n")?;
    out.write_all(b"    pub fn code(&self) -> &'static str {\n")?;
    out.write_all(b"        match self {\n")?;
    for def in &defs {
        out.write_all(
            format!("            Problem::{} => \"{}\",\n", def.name, def.code).as_bytes(),
        )?;
    }
    out.write_all(b"        }\n")?;
    out.write_all(b"    }\n\n")?;

    out.write_all(b"    /// Returns the fixed severity for this problem.\n")?;
    out.write_all(b"    ///\n")?;
    out.write_all(
        b"    /// Severity is a property of the code, never inferred at the call site.\n",
    )?;
    out.write_all(b"    pub fn severity(&self) -> crate::Severity {\n")?;
    out.write_all(b"        match self {\n")?;
    for def in &defs {
        let variant = match def.severity.as_str() {
            "ERROR" => "Error",
            "WARN" => "Warn",
            "INFO" => "Info",
            other => panic!("unknown severity '{other}' in problem-codes.csv"),
        };
        out.write_all(
            format!(
                "            Problem::{} => crate::Severity::{},\n",
                def.name, variant
            )
            .as_bytes(),
        )?;
    }
    out.write_all(b"        }\n")?;
    out.write_all(b"    }\n\n")?;

    out.write_all(b"    /// Returns the fixed message text for this problem.\n")?;
    out.write_all(b"    pub fn message(&self) -> &'static str {\n")?;
    out.write_all(b"        match self {\n")?;
    for def in &defs {
        out.write_all(
            format!(
                "            Problem::{} => \"{}\",\n",
                def.name, def.message
            )
            .as_bytes(),
        )?;
    }
    out.write_all(b"        }\n")?;
    out.write_all(b"    }\n")?;

    out.write_all(b"}\n")?;

    out.flush()?;

    Ok(())
}

fn main() {
    if let Err(err) = create_problems() {
        println!("problem generating problems.rs: {}", err);
        process::exit(1);
    }
}
