//! Embeddable HTTP file server mapping a local directory onto `/`.
//!
//! GET/HEAD serve files. With write access enabled, PUT/POST store the raw
//! request body at the mapped path and DELETE removes files. Any method
//! without a registered operation answers 501.

mod delete;
mod mapper;
mod read;
mod respond;
mod write;

pub use mapper::RootMapper;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Response;
use axum::Router;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 18181;

/// Capabilities of a server instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessMode {
    /// Files can be read but the filesystem cannot be changed.
    #[default]
    ReadOnly,
    /// Uploads and deletes are allowed in addition to reads.
    ReadWrite,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::ReadOnly => write!(f, "read-only"),
            AccessMode::ReadWrite => write!(f, "read-write"),
        }
    }
}

/// What a read of a directory returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// Directories are not served.
    #[default]
    Forbid,
    /// Serve this file from inside the requested directory.
    ServeIndex(String),
}

/// Builder for [`FileServer`]. Defaults: IPv4 loopback, port 18181,
/// read-only, directories forbidden.
#[derive(Debug, Clone)]
pub struct FileServerBuilder {
    root: PathBuf,
    listen_address: IpAddr,
    port: u16,
    mode: AccessMode,
    directory_policy: DirectoryPolicy,
}

impl FileServerBuilder {
    /// Starts a builder over the directory that will be mapped to `/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            listen_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            mode: AccessMode::default(),
            directory_policy: DirectoryPolicy::default(),
        }
    }

    pub fn listen_address(mut self, address: IpAddr) -> Self {
        self.listen_address = address;
        self
    }

    /// Port to listen on; 0 picks an ephemeral port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directory_policy = policy;
        self
    }

    /// Validates the root directory and binds the listener.
    pub async fn bind(self) -> Result<FileServer> {
        let mapper = RootMapper::new(&self.root)?;
        let state = Arc::new(ServerState {
            mapper,
            mode: self.mode,
            directory_policy: self.directory_policy,
        });
        // Whole files arrive as one request body; no framework size cap.
        let router = Router::new()
            .fallback(handle)
            .layer(axum::extract::DefaultBodyLimit::disable())
            .with_state(state);

        let address = SocketAddr::new(self.listen_address, self.port);
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("cannot bind {address}"))?;
        Ok(FileServer { listener, router })
    }
}

/// A bound server, ready to serve requests.
pub struct FileServer {
    listener: TcpListener,
    router: Router,
}

impl FileServer {
    /// The bound address (useful with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until the process ends.
    pub async fn serve(self) -> Result<()> {
        tracing::info!(
            "file server listening on http://{}",
            self.listener.local_addr()?
        );
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

struct ServerState {
    mapper: RootMapper,
    mode: AccessMode,
    directory_policy: DirectoryPolicy,
}

/// Operation selected for a request method under the current access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Read { head_only: bool },
    Write,
    Delete,
}

fn select_operation(method: &Method, mode: AccessMode) -> Option<Operation> {
    let writable = mode == AccessMode::ReadWrite;
    if *method == Method::GET {
        Some(Operation::Read { head_only: false })
    } else if *method == Method::HEAD {
        Some(Operation::Read { head_only: true })
    } else if writable && (*method == Method::PUT || *method == Method::POST) {
        Some(Operation::Write)
    } else if writable && *method == Method::DELETE {
        Some(Operation::Delete)
    } else {
        None
    }
}

async fn handle(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();
    let Some(operation) = select_operation(&method, state.mode) else {
        tracing::debug!("{method} {path}: no operation registered");
        return respond::not_implemented();
    };

    let local = match state.mapper.resolve(path) {
        Ok(local) => local,
        Err(err) => {
            tracing::warn!("unresolvable request path {path}: {err:#}");
            return respond::not_found(format!(
                "404: The requested resource was not found: {path}"
            ));
        }
    };

    match operation {
        Operation::Read { head_only } => {
            read::serve(&state.directory_policy, &local, path, head_only).await
        }
        Operation::Write => write::serve(&local, path, body).await,
        Operation::Delete => delete::serve(&local, path).await,
    }
}
