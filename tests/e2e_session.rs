//! Session + storage end-to-end: save/resume, load, import rejection,
//! deletion, autosave, and the quota failure path.

use spaceplan::storage::MemoryStore;
use spaceplan::{Error, ExportSettings, Session, Strength};

#[tokio::test]
async fn test_save_and_resume_current_project() {
    let store = MemoryStore::new();

    let project_id = {
        let mut session = Session::new(store.clone());
        session.rename_project("Studio Fit-Out");
        let a = session.add_space();
        let b = session.add_space();
        session.cycle_adjacency(&a, &b);
        session.save().await.unwrap();
        session.project().id.clone()
    };

    // A new session over the same store resumes the saved project.
    let session = Session::open(store).await.unwrap();
    assert_eq!(session.project().id, project_id);
    assert_eq!(session.project().name, "Studio Fit-Out");
    assert_eq!(session.project().spaces.len(), 2);
    assert_eq!(session.project().adjacencies.len(), 1);
}

#[tokio::test]
async fn test_open_empty_store_starts_fresh() {
    let session = Session::open(MemoryStore::new()).await.unwrap();
    assert_eq!(session.project().name, "Untitled Project");
    assert!(session.project().spaces.is_empty());
}

#[tokio::test]
async fn test_load_switches_projects() {
    let store = MemoryStore::new();
    let mut session = Session::new(store);

    session.rename_project("First");
    session.add_space();
    session.save().await.unwrap();
    let first_id = session.project().id.clone();

    // Import a second project, then go back to the first.
    let mut other = spaceplan::Project::new("Second");
    other.add_space();
    let json = spaceplan::interchange::encode_project(&other).unwrap();
    session.import_json(&json).await.unwrap();
    assert_eq!(session.project().name, "Second");

    session.load(&first_id).await.unwrap();
    assert_eq!(session.project().name, "First");
}

#[tokio::test]
async fn test_load_unknown_id_is_not_found() {
    let mut session = Session::new(MemoryStore::new());
    let err = session.load("no-such-project").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_rejected_import_leaves_project_untouched() {
    let mut session = Session::new(MemoryStore::new());
    session.rename_project("Keep Me");
    let a = session.add_space();
    let b = session.add_space();
    session.cycle_adjacency(&a, &b);

    let err = session.import_json(r#"{"name": "no spaces field"}"#).await.unwrap_err();
    assert!(matches!(err, Error::InvalidProject(_)));

    assert_eq!(session.project().name, "Keep Me");
    assert_eq!(session.project().spaces.len(), 2);
    assert_eq!(session.project().adjacency(&a, &b), Some(Strength::Required));
}

#[tokio::test]
async fn test_import_adopts_and_persists() {
    let store = MemoryStore::new();
    let mut session = Session::new(store.clone());

    let mut incoming = spaceplan::Project::new("Imported Plan");
    incoming.add_space();
    let json = spaceplan::interchange::encode_project_pretty(&incoming).unwrap();

    session.import_json(&json).await.unwrap();
    assert_eq!(session.project().id, incoming.id);

    let stored = session
        .storage()
        .load_project(&incoming.id)
        .await
        .unwrap()
        .expect("import persists the project");
    assert_eq!(stored.name, "Imported Plan");
}

#[tokio::test]
async fn test_delete_project_clears_current_pointer() {
    let store = MemoryStore::new();
    let mut session = Session::new(store);
    session.add_space();
    session.save().await.unwrap();
    let id = session.project().id.clone();

    session.storage().delete_project(&id).await.unwrap();

    assert!(session.storage().load_project(&id).await.unwrap().is_none());
    assert_eq!(session.storage().current_project_id().await.unwrap(), None);
}

#[tokio::test]
async fn test_quota_failure_surfaces_and_state_survives() {
    // A store too small for the project list: save fails, memory wins.
    let mut session = Session::new(MemoryStore::with_quota(64));
    session.add_space();

    let err = session.save().await.unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert_eq!(session.project().spaces.len(), 1, "in-memory state is authoritative");
}

#[tokio::test]
async fn test_autosave_skips_empty_project_and_swallows_failures() {
    // Empty project: nothing written.
    let store = MemoryStore::new();
    let session = Session::new(store.clone());
    session.autosave_tick().await;
    assert!(store.is_empty());

    // Non-empty project: persisted.
    let mut session = Session::new(store.clone());
    session.add_space();
    session.autosave_tick().await;
    assert!(!store.is_empty());

    // Failing store: no panic, no error escapes.
    let mut failing = Session::new(MemoryStore::with_quota(8));
    failing.add_space();
    failing.autosave_tick().await;
}

#[tokio::test]
async fn test_print_document_from_session() {
    let mut session = Session::new(MemoryStore::new());
    session.rename_project("Print Me");
    let a = session.add_space();
    session.add_space();
    session.project_mut().space_mut(&a).unwrap().planned_area = Some(80.0);

    let mut buf = Vec::new();
    session
        .write_print_document(&ExportSettings::default(), &mut buf)
        .unwrap();
    let html = String::from_utf8(buf).unwrap();

    assert!(html.contains("Print Me"));
    assert!(html.contains("Program Criteria"));
    assert!(html.contains("Adjacency Matrix"));
}

#[tokio::test]
async fn test_brand_settings_roundtrip() {
    let store = MemoryStore::new();
    {
        let mut session = Session::new(store.clone());
        let mut brand = session.brand_settings().clone();
        brand.company_name = "Airi Studio".into();
        session.save_brand_settings(brand).await.unwrap();
    }

    let session = Session::open(store).await.unwrap();
    assert_eq!(session.brand_settings().company_name, "Airi Studio");
}
