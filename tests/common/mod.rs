use assert_cmd::Command;

pub fn helptree_cmd() -> Command {
    let mut cmd = Command::cargo_bin("helptree").unwrap();
    cmd.env_remove("HELPTREE_CONVERTER");
    cmd.env_remove("RUST_LOG");
    cmd
}
