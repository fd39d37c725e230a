use assert_cmd::Command;

pub fn brewlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("brewlog").unwrap();
    cmd.env_remove("BREWLOG_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
