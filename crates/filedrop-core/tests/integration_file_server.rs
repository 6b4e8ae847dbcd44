//! Integration tests: raw HTTP semantics of the file server.
//!
//! Starts the real server over a temp directory root and drives it with a
//! blocking libcurl client.

mod common;

use common::{http, server};
use filedrop_core::server::{AccessMode, DirectoryPolicy};
use tempfile::tempdir;

#[test]
fn put_stores_bytes_and_get_returns_them() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let body: Vec<u8> = (0u8..=255).cycle().take(16 * 1024).collect();
    let reply = http::put(&format!("{base}/archive.bin"), &body);
    assert_eq!(reply.code, 201);
    assert!(reply.body.is_empty(), "201 carries no body");

    let stored = std::fs::read(root.path().join("archive.bin")).unwrap();
    assert_eq!(stored, body, "stored bytes must match the request body");

    let get = http::get(&format!("{base}/archive.bin"));
    assert_eq!(get.code, 200);
    assert_eq!(get.body, body);
}

#[test]
fn second_put_overwrites() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    assert_eq!(http::put(&format!("{base}/note.txt"), b"first").code, 201);
    assert_eq!(http::put(&format!("{base}/note.txt"), b"second").code, 201);
    assert_eq!(std::fs::read(root.path().join("note.txt")).unwrap(), b"second");
}

#[test]
fn empty_put_creates_empty_file() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    assert_eq!(http::put(&format!("{base}/empty.bin"), b"").code, 201);
    assert_eq!(std::fs::read(root.path().join("empty.bin")).unwrap(), b"");
}

#[test]
fn post_behaves_like_put() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let reply = http::post(&format!("{base}/posted.txt"), b"posted body");
    assert_eq!(reply.code, 201);
    assert_eq!(
        std::fs::read(root.path().join("posted.txt")).unwrap(),
        b"posted body"
    );
}

#[test]
fn put_onto_a_directory_is_forbidden() {
    let root = tempdir().unwrap();
    std::fs::create_dir(root.path().join("sub")).unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let reply = http::put(&format!("{base}/sub"), b"x");
    assert_eq!(reply.code, 403);
    assert!(root.path().join("sub").is_dir(), "directory must survive");
}

#[test]
fn put_into_missing_subdirectory_is_not_found() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let reply = http::put(&format!("{base}/no/such/dir/f.txt"), b"x");
    assert_eq!(reply.code, 404);
}

#[test]
fn get_missing_resource_is_not_found_with_message() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadOnly, DirectoryPolicy::Forbid);

    let reply = http::get(&format!("{base}/nope.txt"));
    assert_eq!(reply.code, 404);
    let text = String::from_utf8(reply.body).unwrap();
    assert_eq!(text, "404: The requested resource was not found: /nope.txt");
}

#[test]
fn get_serves_guessed_content_type() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("page.html"), b"<html></html>").unwrap();
    std::fs::write(root.path().join("blob.weird"), b"data").unwrap();
    let base = server::start(root.path(), AccessMode::ReadOnly, DirectoryPolicy::Forbid);

    let html = http::get(&format!("{base}/page.html"));
    assert_eq!(html.code, 200);
    assert_eq!(html.content_type.as_deref(), Some("text/html"));

    let blob = http::get(&format!("{base}/blob.weird"));
    assert_eq!(blob.code, 200);
    assert_eq!(blob.content_type.as_deref(), Some("application/octet-stream"));
}

#[test]
fn head_returns_headers_without_body() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("f.txt"), b"hello head").unwrap();
    let base = server::start(root.path(), AccessMode::ReadOnly, DirectoryPolicy::Forbid);

    let reply = http::head(&format!("{base}/f.txt"));
    assert_eq!(reply.code, 200);
    assert!(reply.body.is_empty());
    assert_eq!(reply.content_type.as_deref(), Some("text/plain"));
}

#[test]
fn directory_reads_are_forbidden_by_default() {
    let root = tempdir().unwrap();
    std::fs::create_dir(root.path().join("docs")).unwrap();
    let base = server::start(root.path(), AccessMode::ReadOnly, DirectoryPolicy::Forbid);

    assert_eq!(http::get(&format!("{base}/docs")).code, 403);
    assert_eq!(http::get(&format!("{base}/")).code, 403);
}

#[test]
fn index_policy_serves_the_directory_index() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("demo.html"), b"<h1>demo</h1>").unwrap();
    std::fs::create_dir(root.path().join("bare")).unwrap();
    let base = server::start(
        root.path(),
        AccessMode::ReadOnly,
        DirectoryPolicy::ServeIndex("demo.html".to_string()),
    );

    let reply = http::get(&format!("{base}/"));
    assert_eq!(reply.code, 200);
    assert_eq!(reply.body, b"<h1>demo</h1>");

    // A directory without the index file has nothing to serve.
    assert_eq!(http::get(&format!("{base}/bare")).code, 404);
}

#[test]
fn delete_removes_the_file_and_repeating_is_not_found() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("gone.txt"), b"x").unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let url = format!("{base}/gone.txt");
    let first = http::delete(&url);
    assert_eq!(first.code, 204);
    assert!(first.body.is_empty());
    assert!(!root.path().join("gone.txt").exists());

    let second = http::delete(&url);
    assert_eq!(second.code, 404);
    let text = String::from_utf8(second.body).unwrap();
    assert_eq!(text, "Resource cannot be found: /gone.txt");
}

#[test]
fn delete_of_a_directory_is_forbidden() {
    let root = tempdir().unwrap();
    std::fs::create_dir(root.path().join("keep")).unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    assert_eq!(http::delete(&format!("{base}/keep")).code, 403);
    assert!(root.path().join("keep").is_dir());
}

#[test]
fn read_only_mode_answers_not_implemented_for_writes() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("f.txt"), b"ro").unwrap();
    let base = server::start(root.path(), AccessMode::ReadOnly, DirectoryPolicy::Forbid);

    assert_eq!(http::put(&format!("{base}/f.txt"), b"new").code, 501);
    assert_eq!(http::post(&format!("{base}/f.txt"), b"new").code, 501);
    assert_eq!(http::delete(&format!("{base}/f.txt")).code, 501);
    assert_eq!(std::fs::read(root.path().join("f.txt")).unwrap(), b"ro");
}

#[test]
fn unregistered_methods_answer_not_implemented() {
    let root = tempdir().unwrap();
    let base = server::start(root.path(), AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    let reply = http::custom("PATCH", &format!("{base}/x"));
    assert_eq!(reply.code, 501);
    assert_eq!(String::from_utf8(reply.body).unwrap(), "Method not implemented");
}

#[test]
fn traversal_stays_inside_the_root() {
    let parent = tempdir().unwrap();
    let root = parent.path().join("root");
    std::fs::create_dir(&root).unwrap();
    let base = server::start(&root, AccessMode::ReadWrite, DirectoryPolicy::Forbid);

    assert_eq!(http::put(&format!("{base}/../escape.txt"), b"x").code, 201);
    assert!(
        root.join("escape.txt").exists(),
        "dotdot must be clamped to the root"
    );
    assert!(!parent.path().join("escape.txt").exists());

    assert_eq!(http::get(&format!("{base}/../../etc/hostname")).code, 404);
}
