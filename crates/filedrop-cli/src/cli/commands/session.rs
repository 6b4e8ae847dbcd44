//! `filedrop session` – interactive upload/delete session.
//!
//! Reads commands from stdin and renders the panel view after each
//! operation. One session keeps one current upload target, so `delete`
//! always targets the last successful upload.

use anyhow::Result;
use filedrop_core::client::{CurlTransfer, PanelView, StatusTone, UploadPanel};
use filedrop_core::config::FiledropConfig;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn run_session(cfg: &FiledropConfig, server: Option<&str>) -> Result<()> {
    let base = server.unwrap_or(&cfg.server_url);
    let mut panel = UploadPanel::new(CurlTransfer::default(), base)?;
    println!("Session with {base}. Commands: upload <path>, delete, status, quit.");

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "upload" => {
                let path = rest.trim();
                if path.is_empty() {
                    println!("usage: upload <path>");
                    continue;
                }
                match panel.upload(Path::new(path)) {
                    Ok(_) => render(panel.view()),
                    Err(err) => println!("error: {err:#}"),
                }
            }
            "delete" => match panel.delete_current() {
                Ok(_) => render(panel.view()),
                Err(err) => println!("error: {err:#}"),
            },
            "status" => render(panel.view()),
            "quit" | "exit" => break,
            other => println!("unknown command: {other}"),
        }
    }
    Ok(())
}

fn render(view: &PanelView) {
    if view.upload_success_visible {
        if let (Some(name), Some(link)) = (&view.shown_file_name, &view.target_link) {
            println!("uploaded: {name} -> {link}");
        }
    }
    if view.upload_error_visible {
        println!("upload failed");
    }
    if let Some((tone, text)) = &view.delete_status {
        let tag = match tone {
            StatusTone::Success => "ok",
            StatusTone::Danger => "error",
        };
        println!("delete [{tag}]: {text}");
    }
}
