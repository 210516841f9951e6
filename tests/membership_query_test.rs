// Integration tests for DomainMembershipQuery against a fake host backend

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::sync::{Arc, Mutex};

use domaincheck::membership::{
    check_domain_status, DomainMembershipQuery, HostInfo, JoinInformation, JoinStatus,
    MembershipRecord, WorkstationInfo, UNKNOWN_COMPUTER_NAME,
};
use domaincheck::HostQueryError;

/// Scriptable stand-in for the OS. `None` in any slot makes that call fail.
struct FakeHost {
    langroup: RefCell<Option<String>>,
    join_code: Cell<Option<i32>>,
    computer_name: Option<String>,
    fqdn: Option<String>,
    join_calls: Cell<usize>,
}

impl FakeHost {
    fn new(langroup: &str, join_code: i32) -> Self {
        Self {
            langroup: RefCell::new(Some(langroup.to_string())),
            join_code: Cell::new(Some(join_code)),
            computer_name: Some("PC01".to_string()),
            fqdn: Some("pc01.corp.example.com".to_string()),
            join_calls: Cell::new(0),
        }
    }

    fn set(&self, langroup: &str, join_code: i32) {
        *self.langroup.borrow_mut() = Some(langroup.to_string());
        self.join_code.set(Some(join_code));
    }
}

impl HostInfo for FakeHost {
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError> {
        self.langroup
            .borrow()
            .as_ref()
            .map(|g| WorkstationInfo::with_langroup(g.as_str()))
            .ok_or(HostQueryError::Api {
                call: "NetWkstaGetInfo",
                code: 53,
            })
    }

    fn join_information(&self) -> Result<JoinInformation, HostQueryError> {
        self.join_calls.set(self.join_calls.get() + 1);
        match self.join_code.get() {
            Some(status_code) => Ok(JoinInformation {
                name: String::new(),
                status_code,
            }),
            None => Err(HostQueryError::Api {
                call: "NetGetJoinInformation",
                code: 5,
            }),
        }
    }

    fn computer_name(&self) -> Result<String, HostQueryError> {
        self.computer_name
            .clone()
            .ok_or(HostQueryError::Unsupported("GetComputerNameExW"))
    }

    fn fully_qualified_name(&self) -> Result<String, HostQueryError> {
        self.fqdn
            .clone()
            .ok_or_else(|| HostQueryError::malformed("GetComputerNameExW", "no DNS suffix"))
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records formatted log lines.
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

#[test]
fn test_supported_codes_map_exactly() {
    let expected = [
        (0, JoinStatus::Unknown),
        (1, JoinStatus::Unjoined),
        (2, JoinStatus::Workgroup),
        (3, JoinStatus::Domain),
    ];
    for (code, status) in expected {
        let query = DomainMembershipQuery::new(FakeHost::new("X", code));
        assert_eq!(query.resolve_join_status(), status, "code {code}");
    }
}

#[test]
fn test_unmapped_codes_resolve_unknown() {
    for code in [-7, 4, 5, 99, i32::MAX] {
        let query = DomainMembershipQuery::new(FakeHost::new("X", code));
        assert_eq!(query.resolve_join_status(), JoinStatus::Unknown, "code {code}");
    }
}

#[test]
fn test_is_domain_iff_join_type_domain() {
    for code in -1..=5 {
        let mut query = DomainMembershipQuery::new(FakeHost::new("X", code));
        let joined = query.query_is_domain_joined();
        let record = query.current_record().unwrap();
        assert_eq!(record.is_domain(), record.join_type() == JoinStatus::Domain);
        assert_eq!(joined, record.is_domain());
    }
}

#[test]
fn test_join_status_failure_logs_warning() {
    let host = FakeHost::new("CORP", 3);
    host.join_code.set(None);
    let query = DomainMembershipQuery::new(&host);

    let (status, logs) = capture_logs(|| query.resolve_join_status());
    assert_eq!(status, JoinStatus::Unknown);
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("Could not get join information"), "logs: {logs}");
    assert!(logs.contains("NetGetJoinInformation failed with status 5"), "logs: {logs}");
}

#[test]
fn test_no_record_before_query() {
    let query = DomainMembershipQuery::new(FakeHost::new("CORP", 3));
    let (record, logs) = capture_logs(|| query.current_record().cloned());
    assert!(record.is_none());
    assert!(logs.contains("WARN"), "logs: {logs}");
}

#[test]
fn test_second_query_overwrites_record() {
    let host = FakeHost::new("CORP", 3);
    let mut query = DomainMembershipQuery::new(&host);
    assert!(query.query_is_domain_joined());

    host.set("HOMENET", 1);
    assert!(!query.query_is_domain_joined());
    assert_eq!(
        query.current_record(),
        Some(&MembershipRecord::new("HOMENET", JoinStatus::Unjoined))
    );
}

#[test]
fn test_fqdn_failure_matches_computer_name() {
    let host = FakeHost {
        fqdn: None,
        ..FakeHost::new("CORP", 3)
    };
    let query = DomainMembershipQuery::new(host);
    assert_eq!(query.fully_qualified_computer_name(), query.computer_name());
    assert_eq!(query.fully_qualified_computer_name(), "PC01");
}

#[test]
fn test_fqdn_and_name_both_fail() {
    let host = FakeHost {
        fqdn: None,
        computer_name: None,
        ..FakeHost::new("CORP", 3)
    };
    let query = DomainMembershipQuery::new(host);
    assert_eq!(query.fully_qualified_computer_name(), UNKNOWN_COMPUTER_NAME);
}

#[test]
fn test_scenario_domain_joined() {
    let mut query = DomainMembershipQuery::new(FakeHost::new("CORP", 3));
    let (joined, logs) = capture_logs(|| query.query_is_domain_joined());
    assert!(joined);
    assert!(logs.contains("Network membership resolved"), "logs: {logs}");

    let record = query.current_record().unwrap();
    assert_eq!(record.name(), "CORP");
    assert!(record.is_domain());
    assert_eq!(record.join_type(), JoinStatus::Domain);
}

#[test]
fn test_scenario_workgroup() {
    let mut query = DomainMembershipQuery::new(FakeHost::new("WORKGROUP", 2));
    assert!(!query.query_is_domain_joined());
    assert_eq!(
        query.current_record(),
        Some(&MembershipRecord::new("WORKGROUP", JoinStatus::Workgroup))
    );
    assert!(!query.current_record().unwrap().is_domain());
}

#[test]
fn test_scenario_join_status_error() {
    let host = FakeHost::new("CORP", 3);
    host.join_code.set(None);
    let mut query = DomainMembershipQuery::new(host);

    assert!(!query.query_is_domain_joined());
    let record = query.current_record().unwrap();
    assert_eq!(record.join_type(), JoinStatus::Unknown);
    assert!(!record.is_domain());
}

#[test]
fn test_scenario_computer_name_error() {
    let host = FakeHost {
        computer_name: None,
        ..FakeHost::new("CORP", 3)
    };
    let query = DomainMembershipQuery::new(host);
    let (name, logs) = capture_logs(|| query.computer_name());
    assert_eq!(name, "UNKNOWN");
    assert!(logs.contains("ERROR"), "logs: {logs}");
}

#[test]
fn test_workstation_failure_keeps_previous_record() {
    let host = FakeHost::new("CORP", 3);
    let mut query = DomainMembershipQuery::new(&host);
    assert!(query.query_is_domain_joined());

    *host.langroup.borrow_mut() = None;
    let (joined, logs) = capture_logs(|| query.query_is_domain_joined());
    assert!(!joined);
    assert!(logs.contains("Failed to query workstation info"), "logs: {logs}");
    assert_eq!(host.join_calls.get(), 1);
    assert_eq!(
        query.current_record(),
        Some(&MembershipRecord::new("CORP", JoinStatus::Domain))
    );
}

#[test]
fn test_workstation_failure_before_any_record() {
    let host = FakeHost::new("CORP", 3);
    *host.langroup.borrow_mut() = None;
    let mut query = DomainMembershipQuery::new(host);
    assert!(!query.query_is_domain_joined());
    assert!(query.current_record().is_none());
}

#[test]
fn test_check_domain_status_report() {
    let mut query = DomainMembershipQuery::new(FakeHost::new("CORP", 3));
    let report = check_domain_status(&mut query);

    assert!(report.is_domain_joined);
    assert_eq!(report.computer_name, "PC01");
    assert_eq!(report.full_name, "pc01.corp.example.com");
    assert_eq!(
        report.domain_info,
        Some(MembershipRecord::new("CORP", JoinStatus::Domain))
    );
}
