//! Runs the real file server on a background thread for integration tests.
//!
//! Binds an ephemeral loopback port and returns the base URL
//! (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.

use filedrop_core::server::{AccessMode, DirectoryPolicy, FileServerBuilder};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

pub fn start(root: &Path, mode: AccessMode, policy: DirectoryPolicy) -> String {
    let builder = FileServerBuilder::new(root)
        .port(0)
        .access_mode(mode)
        .directory_policy(policy);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        rt.block_on(async move {
            let server = builder.bind().await.expect("bind");
            tx.send(server.local_addr().expect("local addr")).expect("send addr");
            server.serve().await.expect("serve");
        });
    });

    let addr = rx.recv().expect("server address");
    format!("http://{addr}")
}
