// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::config::options::PluginOptions;
use crate::config::session::Session;
use crate::custom::CustomQuery;

pub fn options_text(options: &PluginOptions, queries: &[CustomQuery]) -> String {
    let mut lines = vec![
        format!("timeout: {}", options.timeout()),
        format!("keep_alive: {}", options.keep_alive()),
        format!("call_timeout: {}", options.call_timeout()),
        format!("custom_queries_enabled: {}", options.custom_queries_enabled()),
        format!("custom_queries_path: {}", options.custom_queries_path()),
    ];
    lines.extend(options.default_session().map(session_line));
    lines.extend(options.sessions().iter().map(session_line));
    lines.extend(queries.iter().map(|q| format!("query: {}", q.name())));
    lines.join("\n") + "\n"
}

/// password is never shown
fn session_line(session: &Session) -> String {
    format!(
        "session: {} uri: {} user: {} password: {} tls: {}",
        session.name(),
        session.uri().unwrap_or_default(),
        session.user().unwrap_or_default(),
        if session.password().is_some() {
            "<hidden>"
        } else {
            "none"
        },
        session
            .tls()
            .connect()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MysqlConfig;

    #[test]
    fn test_options_text() {
        let config = MysqlConfig::load_str(
            r#"
mysql:
  custom_queries:
    path: /q
  default:
    uri: tcp://localhost:3306
    password: secret
  sessions:
    - name: a
      tls_connect: required
"#,
        )
        .unwrap();
        let text = options_text(config.options().unwrap(), &[]);
        assert_eq!(
            text,
            "timeout: 3\n\
             keep_alive: 300\n\
             call_timeout: 3\n\
             custom_queries_enabled: false\n\
             custom_queries_path: /q\n\
             session: default uri: tcp://localhost:3306 user:  password: <hidden> tls: none\n\
             session: a uri:  user:  password: none tls: required\n"
        );
        assert!(!text.contains("secret"));
    }
}
