mod common;

use common::fixtures::sample_claim;
use common::{GeneratedPdf, TestResult, generator_in, init_logger};
use furips::{PersistenceManager, TemplateId};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_creates_missing_output_directories() -> TestResult {
    let dir = tempdir()?;
    let generator = generator_in(&dir.path().join("a").join("b")).build()?;
    let saved = generator.generate_to_output_dir(TemplateId::Furips2, &sample_claim(), "8")?;
    assert!(saved.is_file());
    assert_eq!(saved.parent(), Some(dir.path().join("a").join("b").as_path()));
    Ok(())
}

#[test]
fn test_blocked_destination_falls_back_to_timestamped_name() -> TestResult {
    init_logger();
    let dir = tempdir()?;
    let destination = dir.path().join("furips_8_furips1.pdf");
    // Something that cannot be replaced by a file sits at the destination.
    fs::create_dir(&destination)?;
    fs::write(destination.join("lock"), b"")?;

    let generator = generator_in(dir.path()).build()?;
    let saved = generator.generate(TemplateId::Furips1, &sample_claim(), &destination)?;

    assert_ne!(saved, destination);
    assert_eq!(saved.parent(), Some(dir.path()));
    let name = saved.file_name().and_then(|n| n.to_str()).ok_or("bad name")?;
    assert!(name.starts_with("furips_8_furips1_"), "unexpected name {}", name);
    assert!(name.ends_with(".pdf"));
    assert_eq!(GeneratedPdf::from_file(&saved)?.page_count(), 1);
    Ok(())
}

#[test]
fn test_temporary_file_is_kept_when_every_rename_fails() -> TestResult {
    let dir = tempdir()?;
    let destination = dir.path().join("furips_8_furips1.pdf");
    fs::create_dir(&destination)?;
    fs::write(destination.join("lock"), b"")?;
    fs::write(dir.path().join("furips_8_furips1_fixed.pdf"), b"existing")?;

    let generator = generator_in(dir.path())
        .with_persistence(PersistenceManager::new().with_alternate_suffix(|| "_fixed".to_string()))
        .build()?;
    let saved = generator.generate(TemplateId::Furips1, &sample_claim(), &destination)?;

    assert_eq!(saved.extension().and_then(|e| e.to_str()), Some("tmp"));
    assert!(saved.starts_with(dir.path()));
    assert_eq!(GeneratedPdf::from_file(&saved)?.page_count(), 1);
    assert_eq!(fs::read(dir.path().join("furips_8_furips1_fixed.pdf"))?, b"existing");
    Ok(())
}
