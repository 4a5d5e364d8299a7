//!
//! The contract loader library.
//!

pub mod address;
pub mod broadcaster;
pub mod compiler;
pub mod config;
pub mod dependency;
pub mod error;
pub mod manifest;
pub mod module;
pub mod node;
pub mod registry;
pub mod rewriter;
pub mod shortcut;
pub mod sources;


pub use self::address::AddressIterator;
pub use self::broadcaster::config::Config as BroadcasterConfig;
pub use self::broadcaster::policy::RetryPolicy;
pub use self::broadcaster::policy::TimeoutPolicy;
pub use self::broadcaster::Broadcaster;
pub use self::compiler::serpent::SerpentCompiler;
pub use self::compiler::Compiler;
pub use self::config::Config;
pub use self::dependency::DependencyGraph;
pub use self::error::Error;
pub use self::manifest::Manifest;
pub use self::module::state::State;
pub use self::module::Module;
pub use self::node::client::Client;
pub use self::node::endpoint::Endpoint;
pub use self::node::Node;
pub use self::rewriter::strategy::Strategy;
pub use self::shortcut::ShortcutTable;

use std::collections::BTreeSet;

use colored::Colorize;

use crate::rewriter::import::ImportParser;

///
/// The contract loader.
///
/// Deploys every discovered module at the address precomputed from the creator nonce,
/// so that the modules can reference each other before any of them exists on chain.
///
pub struct ContractLoader<N, C>
where
    N: Node,
    C: Compiler,
{
    /// The node client.
    node: N,
    /// The module compiler.
    compiler: C,
    /// The loader configuration.
    config: Config,
}

impl<N, C> ContractLoader<N, C>
where
    N: Node,
    C: Compiler,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(node: N, compiler: C, config: Config) -> Self {
        Self {
            node,
            compiler,
            config,
        }
    }

    ///
    /// Runs the build.
    ///
    /// Once the addresses are allocated, a failure dumps the manifest to the build
    /// directory before the error is returned.
    ///
    pub fn run(&mut self, policy: &mut dyn RetryPolicy) -> Result<Manifest, Error> {
        let modules = sources::discover(
            self.config.sources.as_slice(),
            self.config.is_recursive,
            self.config.build.as_path(),
        )?;
        if modules.is_empty() {
            return Err(Error::Configuration(format!(
                "No `.{}` sources found in {:?}",
                Module::EXTENSION,
                self.config.sources
            )));
        }
        ShortcutTable::index(modules.as_slice())?;

        let mut manifest = Manifest::new(self.config.strategy, modules);
        if let Some(contract) = self.config.contract.clone() {
            self.reuse(&mut manifest, contract.as_str())?;
        }

        std::fs::create_dir_all(self.config.build.as_path())
            .map_err(|error| Error::io(self.config.build.as_path(), error))?;

        let creator = match self.config.creator {
            Some(creator) => creator,
            None => self.node.coinbase()?,
        };
        let nonce = self.node.transaction_count(&creator)?;
        manifest.creator = Some(creator);
        manifest.nonce = Some(nonce);
        self.allocate(&mut manifest, creator, nonce)?;

        if let Err(error) = self.deploy(&mut manifest, creator, policy) {
            match manifest.dump(self.config.build.as_path()) {
                Ok(path) => eprintln!(
                    "{:>12} the manifest to {:?}",
                    "Dumped".bright_red().bold(),
                    path
                ),
                Err(dump_error) => eprintln!(
                    "{:>12} the manifest: {dump_error}",
                    "Not dumped".bright_red().bold(),
                ),
            }
            return Err(error);
        }

        let path = manifest.write(self.config.build.as_path())?;
        self.print(format!(
            "{:>12} the manifest to {:?}",
            "Written".bright_green().bold(),
            path
        ));

        if let (Strategy::Registry, Some(registry)) = (self.config.strategy, self.config.registry) {
            if self.node.code(&creator)?.is_empty() {
                let transactions =
                    registry::transactions(creator, registry, manifest.modules.as_slice())?;
                let path = registry::write(self.config.build.as_path(), transactions.as_slice())?;
                self.print(format!(
                    "{:>12} {} registry transactions to {:?}",
                    "Written".bright_green().bold(),
                    transactions.len(),
                    path
                ));
            }
        }

        Ok(manifest)
    }

    ///
    /// Carries over the modules unaffected by the change of `contract` from the previous build.
    ///
    fn reuse(&self, manifest: &mut Manifest, contract: &str) -> Result<(), Error> {
        if manifest.get(contract).is_none() {
            return Err(Error::Configuration(format!(
                "Contract `{contract}` is not among the sources"
            )));
        }

        let parser = ImportParser::default();
        let rebuilt: BTreeSet<String> =
            DependencyGraph::from_modules(manifest.modules.as_slice(), &parser)
                .dependents_of(contract);

        let path = self.config.build.join(Manifest::FILE_NAME);
        let previous = Manifest::read(path.as_path())?;
        for module in manifest
            .modules
            .iter_mut()
            .filter(|module| !rebuilt.contains(module.shortcut.as_str()))
        {
            let deployed = previous
                .get(module.shortcut.as_str())
                .filter(|deployed| deployed.state.is_deployed())
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "Module `{}` is not deployed according to {path:?}, so it cannot be reused",
                        module.shortcut
                    ))
                })?;
            module.address = deployed.address;
            module.nonce = deployed.nonce;
            module.bytecode = deployed.bytecode.clone();
            module.transaction_hash = deployed.transaction_hash;
            module.state = State::Reused;
        }

        self.print(format!(
            "{:>12} {} modules depending on `{contract}`, reusing {}",
            "Rebuilding".bright_green().bold(),
            rebuilt.len(),
            manifest.count(State::Reused),
        ));
        Ok(())
    }

    ///
    /// Allocates a contiguous nonce block to the modules to deploy, in the discovery order.
    ///
    fn allocate(
        &self,
        manifest: &mut Manifest,
        creator: web3::types::Address,
        nonce: u64,
    ) -> Result<(), Error> {
        let mut addresses = AddressIterator::new(creator, nonce);
        for module in manifest
            .modules
            .iter_mut()
            .filter(|module| module.state == State::Pending)
        {
            let (nonce, address) = addresses.next().ok_or_else(|| {
                Error::Configuration(format!("The nonce of {creator:?} is exhausted"))
            })?;
            module.nonce = Some(nonce);
            module.address = Some(address);
        }
        Ok(())
    }

    ///
    /// Rewrites, compiles, and broadcasts the allocated modules.
    ///
    fn deploy(
        &mut self,
        manifest: &mut Manifest,
        creator: web3::types::Address,
        policy: &mut dyn RetryPolicy,
    ) -> Result<(), Error> {
        let shortcuts = ShortcutTable::build(manifest.modules.as_slice())?;
        let rewriter = self.config.strategy.rewriter(self.config.registry)?;

        for module in manifest
            .modules
            .iter_mut()
            .filter(|module| module.state == State::Pending)
        {
            module.preprocessed = Some(rewriter.rewrite(module, &shortcuts)?);
        }

        for module in manifest
            .modules
            .iter_mut()
            .filter(|module| module.state == State::Pending)
        {
            let bytecode = self.compiler.compile(module)?;
            self.print(format!(
                "{:>12} `{}` ({} bytes)",
                "Compiled".bright_green().bold(),
                module.shortcut,
                bytecode.len()
            ));
            module.bytecode = Some(web3::types::Bytes(bytecode));
        }

        let verbose = self.config.verbose && !self.config.quiet;
        let quiet = self.config.quiet;
        let mut broadcaster = Broadcaster::new(
            &mut self.node,
            creator,
            self.config.broadcaster.clone(),
            policy,
            verbose,
        );
        for module in manifest
            .modules
            .iter_mut()
            .filter(|module| module.state == State::Pending)
        {
            if !quiet {
                println!(
                    "{:>12} `{}` at {:?} (nonce {})",
                    "Deploying".bright_green().bold(),
                    module.shortcut,
                    module.address.unwrap_or_default(),
                    module.nonce.unwrap_or_default(),
                );
            }
            let attempt = broadcaster.broadcast(module)?;
            if !quiet {
                println!(
                    "{:>12} `{}` in transaction {:?} after {} polls",
                    "Confirmed".green().bold(),
                    module.shortcut,
                    module.transaction_hash.unwrap_or_default(),
                    attempt.polls,
                );
            }
        }

        Ok(())
    }

    ///
    /// Prints the status line unless the output is suppressed.
    ///
    fn print(&self, line: String) {
        if !self.config.quiet {
            println!("{line}");
        }
    }
}
