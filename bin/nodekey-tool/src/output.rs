//! Destinations for the enodes produced while walking the hierarchy.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use nodekey_primitives::{Enode, Location};

/// Receives one enode per (key file, location) pair, in walking order.
pub(crate) trait EnodeSink {
    /// Records the enode derived for `location` from the current key file.
    fn record(&mut self, location: &Location, enode: &Enode) -> io::Result<()>;
}

/// Writes a `<location>:\t\t<enode>` line for every enode as soon as it is recorded.
#[derive(Debug)]
pub(crate) struct FlatPrinter<W> {
    out: W,
}

impl<W: Write> FlatPrinter<W> {
    pub(crate) const fn new(out: W) -> Self {
        Self { out }
    }

    pub(crate) fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EnodeSink for FlatPrinter<W> {
    fn record(&mut self, location: &Location, enode: &Enode) -> io::Result<()> {
        writeln!(self.out, "{location}:\t\t{enode}")
    }
}

/// Accumulates the enodes of every key file, grouped by location name.
///
/// Each location maps to its bootnode entries in the order the key files were processed. Keys are
/// kept sorted so the serialized object is stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct GroupedEnodes {
    entries: BTreeMap<String, Vec<String>>,
}

impl GroupedEnodes {
    pub(crate) fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    /// Two-space indented JSON object of all accumulated entries.
    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl EnodeSink for GroupedEnodes {
    fn record(&mut self, location: &Location, enode: &Enode) -> io::Result<()> {
        self.entries
            .entry(location.name())
            .or_default()
            .push(enode.bootnode_entry());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nodekey_primitives::{NodeId, NODE_ID_LEN};

    use super::*;

    fn enode(byte: u8, ip: &str) -> Enode {
        Enode::new(NodeId::new([byte; NODE_ID_LEN]), ip)
    }

    #[test]
    fn flat_lines() {
        let mut printer = FlatPrinter::new(Vec::new());
        printer
            .record(&Location::prime(), &enode(0xaa, "10.0.0.1"))
            .unwrap();
        printer
            .record(&Location::zone(0, 1), &enode(0xbb, "10.0.0.1"))
            .unwrap();

        let out = String::from_utf8(printer.finish().unwrap()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("prime:\t\tenode://{}@10.0.0.1", "aa".repeat(NODE_ID_LEN))
        );
        assert!(lines[1].starts_with("zone-0-1:\t\tenode://bbbb"));
    }

    #[test]
    fn grouped_appends_in_file_order() {
        let mut grouped = GroupedEnodes::default();
        grouped
            .record(&Location::region(0), &enode(1, "10.0.0.1"))
            .unwrap();
        grouped
            .record(&Location::region(0), &enode(2, "10.0.0.2"))
            .unwrap();
        grouped
            .record(&Location::prime(), &enode(3, "10.0.0.2"))
            .unwrap();

        let region = &grouped.entries()["region-0"];
        assert_eq!(region.len(), 2);
        assert!(region[0].ends_with("@10.0.0.1\",\n"));
        assert!(region[1].ends_with("@10.0.0.2\",\n"));
        assert_eq!(grouped.entries()["prime"].len(), 1);
    }

    #[test]
    fn grouped_json_is_two_space_indented() {
        let mut grouped = GroupedEnodes::default();
        let e = enode(0xcd, "203.0.113.5");
        grouped.record(&Location::prime(), &e).unwrap();

        let json = grouped.to_json().unwrap();
        let expected = format!(
            "{{\n  \"prime\": [\n    \"\\\"enode://{}@203.0.113.5\\\",\\n\"\n  ]\n}}",
            "cd".repeat(NODE_ID_LEN)
        );
        assert_eq!(json, expected);

        let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, grouped.entries());
    }

    #[test]
    fn empty_grouping_serializes_to_empty_object() {
        assert_eq!(GroupedEnodes::default().to_json().unwrap(), "{}");
    }
}
