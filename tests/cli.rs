use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TWO_TAXA: &str = ">seq1\nATGC\n>seq2\nA--C\n";

fn write_fasta(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn command_default_output() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "Test.fasta", TWO_TAXA);
    let base = dir.path().join("Test");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "#NEXUS\n\nBEGIN DATA;\nDIMENSIONS NTAX=2 NCHAR=4;\nFORMAT DATATYPE=DNA MISSING=N GAP=-;\nMATRIX\n",
        ))
        .stdout(predicate::str::contains("seq1\tATGC\nseq2\tA--C\n;\nEND;\n\nbegin mrbayes;\n"))
        .stdout(predicate::str::contains("  outgroup Placeholder Outgroup;\n"))
        .stdout(predicate::str::contains("mcmcp ngen=5000 "))
        .stdout(predicate::str::contains(format!(
            "  sumt filename={};\nend;\n",
            base.display()
        )));
    Ok(())
}

#[test]
fn command_ngen_and_outgroup() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "primates.fa", ">Homo\nACGT\n>Pan\nACGA\n>Lemur\nTCGA\n");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("20000").arg("Lemur");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  outgroup Lemur;\n"))
        .stdout(predicate::str::contains("mcmcp ngen=20000 "));
    Ok(())
}

#[test]
fn command_unknown_outgroup() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "primates.fa", ">Homo\nACGT\n>Pan\nACGA\n");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("20000").arg("Gorilla");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Outgroup 'Gorilla' is not one of the 2 taxa"));

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input)
        .arg("20000")
        .arg("Gorilla")
        .arg("--no-outgroup-check");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  outgroup Gorilla;\n"));
    Ok(())
}

#[test]
fn command_lowercase_space_style() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "Test.fasta", TWO_TAXA);

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input)
        .arg("--keyword-case")
        .arg("lower")
        .arg("--delimiter")
        .arg("space")
        .arg("--no-blank-line");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("begin data;\ndimensions ntax=2 nchar=4;\n"))
        .stdout(predicate::str::contains("format datatype=dna missing=N gap=-;\nmatrix\n"))
        .stdout(predicate::str::contains("seq1 ATGC\nseq2 A--C\n;\nend;\nbegin mrbayes;\n"));
    Ok(())
}

#[test]
fn command_output_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "Test.fasta", TWO_TAXA);
    let output = dir.path().join("out.nex");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("-o").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output)?;
    assert!(written.starts_with("#NEXUS\n"));
    assert!(written.ends_with("end;\n"));
    Ok(())
}

#[test]
fn command_auto_output() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "Test.fasta", TWO_TAXA);

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("--auto-output");
    cmd.assert().success();

    let written = fs::read_to_string(dir.path().join("Test.nex"))?;
    assert!(written.contains("DIMENSIONS NTAX=2 NCHAR=4;"));
    Ok(())
}

#[test]
fn command_empty_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "empty.fasta", "");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No FASTA records found"));
    Ok(())
}

#[test]
fn command_missing_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("absent.fasta");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"))
        .stderr(predicate::str::contains("Failed to read file"));
    Ok(())
}

#[test]
fn command_strict_lengths() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "ragged.fasta", ">a\nACGT\n>b\nAC\n");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NTAX=2 NCHAR=4;"))
        .stderr(predicate::str::contains("has length 2"));

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("--strict");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Sequence 'b' has length 2, expected 4"));
    Ok(())
}

#[test]
fn command_usage_errors() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg("in.fasta").arg("5000").arg("out").arg("extra");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg("in.fasta").arg("many");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}

#[test]
fn command_auto_output_keeps_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "x.nex", TWO_TAXA);

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("--auto-output");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("would overwrite the input file"));

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input).arg("-o").arg(&input);
    cmd.assert().failure();

    assert_eq!(fs::read_to_string(&input)?, TWO_TAXA);
    Ok(())
}

#[test]
fn command_leading_text_is_skipped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_fasta(&dir, "notes.fasta", "exported by aligner v2\n>s1\nACGT\n>s2\nAC-T\n");

    let mut cmd = cargo_bin_cmd!("fas2nex");
    cmd.arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DIMENSIONS NTAX=2 NCHAR=4;"))
        .stdout(predicate::str::contains("s1\tACGT\ns2\tAC-T\n;\nEND;\n"))
        .stderr(predicate::str::contains("Skipping line 1"));
    Ok(())
}
