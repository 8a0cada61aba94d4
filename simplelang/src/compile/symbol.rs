use crate::{
    constants::{Address, CONST_ONE_ADDR, MAX_VARIABLES, VAR_BASE_ADDR},
    error::SymbolTableFull,
};
use log::debug;
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// Symbol table settings.
#[derive(Debug, Clone)]
pub struct SymbolConf {
    /// First address handed out.
    pub base: Address,
    /// Maximum number of distinct variables.
    pub capacity: usize,
    /// Addresses that are never handed out to variables.
    pub reserved: Vec<Address>,
}

impl Default for SymbolConf {
    fn default() -> Self {
        Self {
            base: VAR_BASE_ADDR,
            capacity: MAX_VARIABLES,
            reserved: vec![CONST_ONE_ADDR],
        }
    }
}

/// Mapping of variable names to memory cells.
///
/// A name is bound to an address the first time it's resolved, and
/// keeps that address until the table is reset. Addresses are
/// never reused.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    conf: SymbolConf,
    symbols: BTreeMap<SmolStr, Address>,
    next_addr: Address,
}

impl SymbolTable {
    pub fn new(conf: SymbolConf) -> Self {
        let next_addr = conf.base;
        Self {
            conf,
            symbols: BTreeMap::new(),
            next_addr,
        }
    }

    /// Address of the given variable, allocating one on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolTableFull`] when the name is new and the table is
    /// at capacity. Existing mappings are left untouched.
    pub fn resolve(&mut self, name: &str) -> Result<Address, SymbolTableFull> {
        if let Some(addr) = self.symbols.get(name) {
            return Ok(*addr);
        }

        let full = || SymbolTableFull {
            name: SmolStr::from(name),
            capacity: self.conf.capacity,
        };

        if self.symbols.len() >= self.conf.capacity {
            return Err(full());
        }

        let mut addr = self.next_addr;
        while self.conf.reserved.contains(&addr) {
            addr = addr.checked_add(1).ok_or_else(full)?;
        }
        let next_addr = addr.checked_add(1).ok_or_else(full)?;

        debug!("variable '{name}' at address {addr}");
        self.symbols.insert(SmolStr::from(name), addr);
        self.next_addr = next_addr;

        Ok(addr)
    }

    /// Address of the given variable, if it was resolved before.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Variables in the order their addresses were allocated.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        let mut entries = self
            .symbols
            .iter()
            .map(|(name, addr)| (name.as_str(), *addr))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(_, addr)| *addr);
        entries.into_iter()
    }

    /// Clear the table so it can be used for another program.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.next_addr = self.conf.base;
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(SymbolConf::default())
    }
}
