// usage.rs — Usage text
//
// Printed to stderr when argument parsing fails.

const USAGE_TEXT: &str = "\
Usage: rcls [-lCx1tr] [directory]

  -l   long listing: permissions, links, owner, group, size, time
  -C   list entries in columns, down then across (default)
  -x   list entries in columns, across then down
  -1   list one entry per line
  -t   sort by modification time, newest first
  -r   reverse the sort order

Colors may be overridden through the RCLS environment variable, e.g.
RCLS=Directory=LightBlue;Archive=Red";

/// Print the usage screen to stderr.
pub fn print_usage() {
    eprintln!("{}", USAGE_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_mentions_every_switch() {
        for switch in ["-l", "-C", "-x", "-1", "-t", "-r"] {
            assert!(USAGE_TEXT.contains(switch), "{} missing from usage", switch);
        }
    }
}
