use anyhow::Result;
use athyg::{
    process::{Loader, TracingProgress},
    LoadError, V1, V2, V3,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::{tempdir, TempDir};

const V1_HEADER: &str = "id,tyc,gaia,hyg,hip,hd,hr,gl,bayer,flam,con,proper,ra,dec,pos_src,\
                         dist,x0,y0,z0,dist_src,mag,absmag,mag_src";

/// A V1 data line with id `id`; other fields fixed.
fn v1_line(id: u64) -> String {
    format!(
        "{},8890-01234-1,abc,{},,,,,,,Cas,,12.5,-45.25,T,100.0,1.0,2.0,3.0,T,9.1,4.2,T",
        id, id
    )
}

fn write_file(dir: &TempDir, name: &str, lines: &[String]) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n"))?;
    Ok(path)
}

fn v1_file(dir: &TempDir, name: &str, ids: &[u64]) -> Result<PathBuf> {
    let mut lines = vec![V1_HEADER.to_string()];
    lines.extend(ids.iter().map(|&id| v1_line(id)));
    write_file(dir, name, &lines)
}

#[test]
fn gaia_text_is_absent_rest_populated() -> Result<()> {
    let dir = tempdir()?;
    let path = v1_file(&dir, "one.csv", &[5])?;

    let stars: Vec<V1> = athyg::load(&[&path])?;
    assert_eq!(stars.len(), 1);
    let star = &stars[0];

    assert_eq!(star.gaia, None);
    assert_eq!(star.id, Some(5));
    assert_eq!(star.tyc.as_deref(), Some("8890-01234-1"));
    assert_eq!(star.hyg, Some(5));
    assert_eq!((star.hip, star.hd, star.hr), (None, None, None));
    assert_eq!(star.gl.as_deref(), Some(""));
    assert_eq!(star.con.as_deref(), Some("Cas"));
    assert_eq!(star.proper.as_deref(), Some(""));
    assert_eq!((star.ra, star.dec), (Some(12.5), Some(-45.25)));
    assert_eq!(star.pos_src.as_deref(), Some("T"));
    assert_eq!(star.dist, Some(100.0));
    assert_eq!((star.x0, star.y0, star.z0), (Some(1.0), Some(2.0), Some(3.0)));
    assert_eq!(star.dist_src.as_deref(), Some("T"));
    assert_eq!((star.mag, star.absmag), (Some(9.1), Some(4.2)));
    assert_eq!(star.mag_src.as_deref(), Some("T"));
    Ok(())
}

#[test]
fn two_files_concatenate_in_list_order() -> Result<()> {
    let dir = tempdir()?;
    let a = v1_file(&dir, "a.csv", &[1, 2, 3])?;
    let b = v1_file(&dir, "b.csv", &[10, 11])?;

    let loader = Loader::new().with_progress(TracingProgress);
    for stars in [
        loader.load::<V1, _>(&[&a, &b])?,
        loader.load_parallel::<V1, _>(&[&a, &b])?,
    ] {
        let ids: Vec<u64> = stars.iter().filter_map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 10, 11]);
    }

    let reversed: Vec<V1> = loader.load(&[&b, &a])?;
    assert_eq!(reversed.first().and_then(|s| s.id), Some(10));
    Ok(())
}

#[test]
fn record_count_matches_data_lines() -> Result<()> {
    let dir = tempdir()?;
    let ids: Vec<u64> = (0..250).collect();
    let path = v1_file(&dir, "many.csv", &ids)?;
    let stars: Vec<V1> = athyg::load(&[path])?;
    assert_eq!(stars.len(), 250);
    assert_eq!(stars[249].id, Some(249));
    Ok(())
}

#[test]
fn short_line_anywhere_returns_no_records() -> Result<()> {
    let dir = tempdir()?;
    let good = v1_file(&dir, "good.csv", &[1, 2])?;
    let bad = write_file(
        &dir,
        "bad.csv",
        &[V1_HEADER.to_string(), v1_line(3), "4,,5".to_string()],
    )?;

    let loader = Loader::new();
    for result in [
        loader.load::<V1, _>(&[&good, &bad, &good]),
        loader.load_parallel::<V1, _>(&[&good, &bad, &good]),
    ] {
        match result {
            Err(LoadError::ArityMismatch { path, line, source, .. }) => {
                assert_eq!(path, bad);
                assert_eq!(line, 3);
                assert_eq!(source.expected, 23);
                assert_eq!(source.found, 3);
            }
            other => panic!("expected arity mismatch, got {:?}", other.map(|r| r.len())),
        }
    }
    Ok(())
}

#[test]
fn long_lines_are_truncated() -> Result<()> {
    let dir = tempdir()?;
    let path = write_file(
        &dir,
        "long.csv",
        &[V1_HEADER.to_string(), format!("{},x,y,z", v1_line(9))],
    )?;
    let stars: Vec<V1> = athyg::load(&[path])?;
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].mag_src.as_deref(), Some("T"));
    Ok(())
}

#[test]
fn nonexistent_path_is_invalid() -> Result<()> {
    let dir = tempdir()?;
    let good = v1_file(&dir, "good.csv", &[1])?;
    let missing = dir.path().join("nope.csv");

    let err = athyg::load::<V1, _>(&[good.as_path(), missing.as_path()]).unwrap_err();
    assert!(matches!(err, LoadError::InvalidPath { ref path, .. } if path == &missing));

    let err = Loader::new()
        .load_parallel::<V1, _>(&[missing.as_path(), good.as_path()])
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidPath { .. }));
    Ok(())
}

#[test]
fn directory_is_an_invalid_path() -> Result<()> {
    let dir = tempdir()?;
    let err = athyg::load::<V2, _>(&[dir.path()]).unwrap_err();
    assert!(matches!(err, LoadError::InvalidPath { .. }));
    Ok(())
}

#[test]
fn v1_file_is_rejected_as_v3() -> Result<()> {
    let dir = tempdir()?;
    let path = v1_file(&dir, "v1.csv", &[1])?;
    let err = athyg::load::<V3, _>(&[path]).unwrap_err();
    assert!(err.to_string().contains("ATHYG v3"), "{}", err);
    Ok(())
}

#[test]
fn v3_prefix_tolerance_and_ci() -> Result<()> {
    let dir = tempdir()?;
    let mut fields = vec![String::new(); 34];
    fields[0] = "42xyz".into();
    fields[21] = "4.83".into();
    fields[22] = "0.656".into();
    fields[23] = "S".into();
    fields[32] = "G2V".into();
    let path = write_file(&dir, "v3.csv", &["header".to_string(), fields.join(",")])?;

    let stars: Vec<V3> = athyg::load(&[Path::new(&path)])?;
    let sun = &stars[0];
    assert_eq!(sun.id, Some(42));
    assert_eq!(sun.absmag, Some(4.83));
    assert_eq!(sun.ci, Some(0.656));
    assert_eq!(sun.mag_src.as_deref(), Some("S"));
    // spectral type is declared decimal; a letter yields nothing
    assert_eq!(sun.spect, None);
    assert_eq!(sun.spect_src.as_deref(), Some(""));
    Ok(())
}
