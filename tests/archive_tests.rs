use chrono::NaiveDate;
use tempfile::TempDir;
use whispers::errors::AppResult;
use whispers::{AppError, ArchiveStore};

fn set_up_archive() -> AppResult<(ArchiveStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let archive = ArchiveStore::open(&temp_dir.path().join("whispers.db"))?;
    archive.initialize()?;
    Ok((archive, temp_dir))
}

const SAMPLE_CONTENTS: [&str; 7] = [
    "Hello world",
    "hello again",
    "A walk by the river, worlds away",
    "100% of the rain fell at once",
    "ünïcode and emoji 🌧",
    "multi\nline\nentry",
    "   ",
];

#[test]
fn test_initialize_twice_preserves_entries() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    archive.append("before")?;

    archive.initialize()?;
    archive.initialize()?;

    let entries = archive.fetch_all()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "before");
    Ok(())
}

#[test]
fn test_append_assigns_strictly_greater_ids() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;

    let mut last_id = 0;
    for content in SAMPLE_CONTENTS {
        let entry = archive.append(content)?;
        assert!(entry.id > last_id, "id {} not above {}", entry.id, last_id);
        last_id = entry.id;

        let all = archive.fetch_all()?;
        let stored: Vec<_> = all.iter().filter(|e| e.id == entry.id).collect();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content, content);
    }
    Ok(())
}

#[test]
fn test_fetch_all_on_empty_archive() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    assert!(archive.fetch_all()?.is_empty());
    assert!(archive.fetch_matching("anything")?.is_empty());
    assert!(archive.fetch_matching("")?.is_empty());
    Ok(())
}

#[test]
fn test_fetch_matching_is_substring_filter_of_fetch_all() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    for content in SAMPLE_CONTENTS {
        archive.append(content)?;
    }
    let all = archive.fetch_all()?;

    for keyword in ["", "world", "hello", "Hello", "%", "🌧", "\n", "line\nentry", "absent"] {
        let expected: Vec<_> = all
            .iter()
            .filter(|e| e.content.contains(keyword))
            .cloned()
            .collect();
        assert_eq!(
            archive.fetch_matching(keyword)?,
            expected,
            "keyword {:?}",
            keyword
        );
    }
    Ok(())
}

#[test]
fn test_hello_world_scenario() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    archive.append("Hello world")?;

    let matches = archive.fetch_matching("world")?;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].content, "Hello world");
    Ok(())
}

#[test]
fn test_insertion_order_scenario() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    archive.append("A")?;
    archive.append("B")?;
    archive.append("C")?;

    let entries = archive.fetch_all()?;
    let contents: Vec<_> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["A", "B", "C"]);
    assert!(entries.windows(2).all(|pair| pair[0].id < pair[1].id));

    assert!(archive.fetch_matching("zzz")?.is_empty());
    Ok(())
}

#[test]
fn test_dates_sort_like_timestamps() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    let later = archive.append_at("later", day.and_hms_opt(10, 0, 0).unwrap())?;
    let earlier = archive.append_at("earlier", day.and_hms_opt(9, 59, 59).unwrap())?;

    assert!(earlier.date_string() < later.date_string());
    assert_eq!(earlier.date_string(), "2024-03-09 09:59:59");
    Ok(())
}

#[test]
fn test_append_fresh_entry_has_current_date() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    let before = chrono::Local::now().naive_local() - chrono::Duration::seconds(1);

    let entry = archive.append("now")?;

    let after = chrono::Local::now().naive_local();
    assert!(entry.date >= before && entry.date <= after);
    Ok(())
}

#[test]
fn test_empty_content_rejected_without_side_effects() -> AppResult<()> {
    let (archive, _temp_dir) = set_up_archive()?;
    let first = archive.append("first")?;

    assert!(matches!(archive.append(""), Err(AppError::Validation(_))));

    let second = archive.append("second")?;
    assert_eq!(archive.count()?, 2);
    assert!(second.id > first.id);
    Ok(())
}

#[test]
fn test_ids_not_reused_after_reopen() -> AppResult<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("whispers.db");

    let first_id = {
        let archive = ArchiveStore::open(&path)?;
        archive.initialize()?;
        archive.append("one")?.id
    };

    let archive = ArchiveStore::open(&path)?;
    archive.initialize()?;
    let second = archive.append("two")?;
    assert!(second.id > first_id);
    Ok(())
}
