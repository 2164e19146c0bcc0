//! # Resolver Facade
//!
//! Forward and reverse name lookups that never block the caller's task.
//!
//! The blocking system calls sit behind [`SystemResolver`] and are pushed
//! onto tokio's blocking pool. An abandoned lookup future does not cancel
//! the underlying call; the worker finishes on its own. Nothing is cached
//! and nothing is retried.
//!
//! Two reverse strategies implement [`ReverseLookup`]:
//! * [`Resolver`] asks the system resolver, so `/etc/hosts` is honoured.
//! * [`PtrResolver`] sends a PTR query straight to a nameserver.

use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use std::vec;

use async_trait::async_trait;
use iputil_common::config::Config;
use iputil_common::error::ResolveError;
use iputil_common::network::family::{AddrInfo, AddressFamily};
use tracing::debug;

use crate::codec;

mod ptr;
mod system;

pub use ptr::PtrResolver;
pub use system::LibcResolver;

/// Blocking name service calls.
pub trait SystemResolver: Send + Sync + 'static {
    /// Returns the primary hostname of `addr`.
    fn lookup_addr(&self, addr: &IpAddr) -> io::Result<String>;

    /// Returns every address the resolver knows for `hostname`, in the
    /// order it reports them.
    fn lookup_host(&self, hostname: &str) -> io::Result<Vec<IpAddr>>;
}

/// Turns an address (plain or wrapped) into a hostname.
#[async_trait]
pub trait ReverseLookup: Send + Sync {
    async fn reverse_lookup(&self, address: &str) -> Result<String, ResolveError>;
}

/// Picks the reverse strategy selected in `cfg`.
pub fn reverse_resolver(cfg: &Config) -> Box<dyn ReverseLookup> {
    if cfg.use_libc_resolver {
        Box::new(Resolver::new())
    } else {
        Box::new(PtrResolver::from_config(cfg))
    }
}

pub struct Resolver<S = LibcResolver> {
    system: Arc<S>,
}

impl Resolver<LibcResolver> {
    pub fn new() -> Self {
        Self::with_system(LibcResolver)
    }
}

impl Default for Resolver<LibcResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Resolver<S> {
    fn clone(&self) -> Self {
        Self {
            system: Arc::clone(&self.system),
        }
    }
}

impl<S: SystemResolver> Resolver<S> {
    pub fn with_system(system: S) -> Self {
        Self {
            system: Arc::new(system),
        }
    }

    /// Resolves `hostname` to a single address, preferring IPv4 the way
    /// `gethostbyname` does and falling back to whatever comes first.
    pub async fn forward_lookup(&self, hostname: &str) -> Result<String, ResolveError> {
        debug!(hostname, "dispatching forward lookup");
        self.preferred_address_async(hostname, Some(AddressFamily::Inet)).await
    }

    /// Lazily lists every address/family pair known for `hostname`.
    ///
    /// The system resolver is only called on the first `next()`. If it
    /// fails, the error is the one and only item. Each call starts a fresh
    /// lookup.
    pub fn list_addresses(&self, hostname: &str) -> AddrInfos<S> {
        AddrInfos {
            system: Arc::clone(&self.system),
            hostname: hostname.to_string(),
            state: LookupState::Pending,
        }
    }

    /// Returns the first address of `preferred` family, else the first
    /// address of any family.
    ///
    /// This blocks; use [`Resolver::preferred_address_async`] from async
    /// code.
    pub fn preferred_address(
        &self,
        hostname: &str,
        preferred: Option<AddressFamily>,
    ) -> Result<String, ResolveError> {
        let mut first: Option<AddrInfo> = None;

        for info in self.list_addresses(hostname) {
            let info: AddrInfo = info?;
            match preferred {
                None => return Ok(info.address.to_string()),
                Some(family) if family == info.family => return Ok(info.address.to_string()),
                Some(_) => {
                    first.get_or_insert(info);
                }
            }
        }

        first
            .map(|info| info.address.to_string())
            .ok_or_else(|| ResolveError::NoAddressFound(hostname.to_string()))
    }

    pub async fn preferred_address_async(
        &self,
        hostname: &str,
        preferred: Option<AddressFamily>,
    ) -> Result<String, ResolveError> {
        let resolver: Resolver<S> = self.clone();
        let hostname: String = hostname.to_string();
        dispatch(move || resolver.preferred_address(&hostname, preferred)).await
    }
}

#[async_trait]
impl<S: SystemResolver> ReverseLookup for Resolver<S> {
    async fn reverse_lookup(&self, address: &str) -> Result<String, ResolveError> {
        let addr: IpAddr = codec::parse(address)?;
        let system: Arc<S> = Arc::clone(&self.system);
        debug!(%addr, "dispatching reverse lookup");
        dispatch(move || {
            system
                .lookup_addr(&addr)
                .map_err(|e| ResolveError::lookup(addr.to_string(), e))
        })
        .await
    }
}

/// Runs `job` on the blocking pool and waits for its single result.
async fn dispatch<T, F>(job: F) -> Result<T, ResolveError>
where
    F: FnOnce() -> Result<T, ResolveError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ResolveError::Worker(e.to_string()))?
}

enum LookupState {
    Pending,
    Ready(vec::IntoIter<IpAddr>),
    Done,
}

/// Sequence returned by [`Resolver::list_addresses`].
pub struct AddrInfos<S> {
    system: Arc<S>,
    hostname: String,
    state: LookupState,
}

impl<S: SystemResolver> Iterator for AddrInfos<S> {
    type Item = Result<AddrInfo, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                LookupState::Pending => match self.system.lookup_host(&self.hostname) {
                    Ok(addrs) => self.state = LookupState::Ready(addrs.into_iter()),
                    Err(e) => {
                        self.state = LookupState::Done;
                        return Some(Err(ResolveError::lookup(self.hostname.clone(), e)));
                    }
                },
                LookupState::Ready(addrs) => {
                    return addrs.next().map(|addr| Ok(AddrInfo::from(addr)));
                }
                LookupState::Done => return None,
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
