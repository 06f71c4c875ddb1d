// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Standard event-name sets
//!
//! Each family is a module of `&'static str` constants plus `VALUES` (the raw
//! names, as fed to [`RegistryBuilder`](crate::RegistryBuilder)) and `ALL`
//! (the fully rendered names).

macro_rules! event_names {
    ($(#[$meta:meta])* $module:ident { $($konst:ident = $value:literal),* $(,)? }) => {
        $(#[$meta])*
        pub mod $module {
            $(pub const $konst: &str = $value;)*

            /// Raw names in declaration order
            pub const VALUES: &[&str] = &[$($value),*];

            /// Rendered names in declaration order
            pub const ALL: &[&str] = &[$($konst),*];
        }
    };
    ($(#[$meta:meta])* $module:ident ($ns:literal) { $($konst:ident = $value:literal),* $(,)? }) => {
        $(#[$meta])*
        pub mod $module {
            pub const NAMESPACE: &str = $ns;

            $(pub const $konst: &str = concat!($ns, "::", $value);)*

            /// Raw names in declaration order
            pub const VALUES: &[&str] = &[$($value),*];

            /// Rendered names in declaration order
            pub const ALL: &[&str] = &[$($konst),*];
        }
    };
}

event_names! {
    /// Un-namespaced transport and lifecycle events
    event_type {
        ACKNOWLEDGE = "acknowledge",
        ACK_TIMEOUT = "ack_timeout",
        INIT = "init",
        API_REQUEST = "api_request",
        API_RESPONSE = "api_response",
        AUTH_FAIL = "auth_fail",
        ACCESS_DENIED = "access_denied",
        CLOSE = "close",
        CONFIGURE = "configure",
        LOG = "log",
        MASTER_REQUEST = "master_request",
        MASTER_RESPONSE = "master_response",
        SYNCHRONIZE = "synchronize",
        TERMINATE = "terminate",
        TERMINATED = "terminated",
        SEND_LOGS = "send_logs",
        RELOAD_AGENT_CONFIGURATION = "reload_agent_configuration",
        BROADCAST = "broadcast",
        API_METRIC = "api_metric",
        CLIENT_METRIC = "client_metric",
        SOFTPHONE_STATS = "softphone_stats",
        SOFTPHONE_REPORT = "softphone_report",
        CLIENT_SIDE_LOGS = "client_side_logs",
        SERVER_BOUND_INTERNAL_LOG = "server_bound_internal_log",
        MUTE = "mute",
        IFRAME_STYLE = "iframe_style",
        IFRAME_RETRIES_EXHAUSTED = "iframe_retries_exhausted",
        UPDATE_CONNECTED_CCPS = "update_connected_ccps",
        OUTER_CONTEXT_INFO = "outer_context_info",
        MEDIA_DEVICE_REQUEST = "media_device_request",
        MEDIA_DEVICE_RESPONSE = "media_device_response",
        TAB_ID = "tab_id",
        AUTHORIZE_SUCCESS = "authorize_success",
        AUTHORIZE_RETRIES_EXHAUSTED = "authorize_retries_exhausted",
        CTI_AUTHORIZE_RETRIES_EXHAUSTED = "cti_authorize_retries_exhausted",
        CLICK_STREAM_DATA = "click_stream_data",
    }
}

event_names! {
    /// Topics owned by the master tab
    master ("connect") {
        LOGIN_POPUP = "loginPopup",
        SEND_LOGS = "sendLogs",
        SOFTPHONE = "softphone",
        RINGTONE = "ringtone",
        METRICS = "metrics",
        FAILOVER = "failover",
    }
}

event_names! {
    agent ("agent") {
        INIT = "init",
        UPDATE = "update",
        REFRESH = "refresh",
        ROUTABLE = "routable",
        NOT_ROUTABLE = "not_routable",
        PENDING = "pending",
        CONTACT_PENDING = "contact_pending",
        OFFLINE = "offline",
        ERROR = "error",
        SOFTPHONE_ERROR = "softphone_error",
        WEBSOCKET_CONNECTION_LOST = "websocket_connection_lost",
        WEBSOCKET_CONNECTION_GAINED = "websocket_connection_gained",
        STATE_CHANGE = "state_change",
        ACW = "acw",
        MUTE_TOGGLE = "mute_toggle",
        LOCAL_MEDIA_STREAM_CREATED = "local_media_stream_created",
        ENQUEUED_NEXT_STATE = "enqueued_next_state",
    }
}

event_names! {
    web_socket ("webSocket") {
        INIT_FAILURE = "init_failure",
        CONNECTION_OPEN = "connection_open",
        CONNECTION_CLOSE = "connection_close",
        CONNECTION_ERROR = "connection_error",
        CONNECTION_GAIN = "connection_gain",
        CONNECTION_LOST = "connection_lost",
        SUBSCRIPTION_UPDATE = "subscription_update",
        SUBSCRIPTION_FAILURE = "subscription_failure",
        ALL_MESSAGE = "all_message",
        SEND = "send",
        SUBSCRIBE = "subscribe",
    }
}

event_names! {
    contact ("contact") {
        INIT = "init",
        REFRESH = "refresh",
        DESTROYED = "destroyed",
        INCOMING = "incoming",
        PENDING = "pending",
        CONNECTING = "connecting",
        CONNECTED = "connected",
        MISSED = "missed",
        ACW = "acw",
        VIEW = "view",
        ENDED = "ended",
        ERROR = "error",
        ACCEPTED = "accepted",
    }
}

event_names! {
    channel_view ("taskList") {
        ACTIVATE_CHANNEL_WITH_VIEW_TYPE = "activate_channel_with_view_type",
    }
}

event_names! {
    task ("task") {
        CREATED = "created",
    }
}

event_names! {
    connection ("connection") {
        SESSION_INIT = "session_init",
        READY_TO_START_SESSION = "ready_to_start_session",
    }
}

event_names! {
    configuration ("configuration") {
        CONFIGURE = "configure",
        SET_SPEAKER_DEVICE = "set_speaker_device",
        SET_MICROPHONE_DEVICE = "set_microphone_device",
        SET_RINGER_DEVICE = "set_ringer_device",
        SPEAKER_DEVICE_CHANGED = "speaker_device_changed",
        MICROPHONE_DEVICE_CHANGED = "microphone_device_changed",
        RINGER_DEVICE_CHANGED = "ringer_device_changed",
    }
}

event_names! {
    disaster_recovery ("disasterRecovery") {
        SUPPRESS = "suppress",
        // Tells the shared worker to force offline
        FORCE_OFFLINE = "force_offline",
        SET_OFFLINE = "set_offline",
        INIT_DISASTER_RECOVERY = "init_disaster_recovery",
        FAILOVER = "failover",
        // Soft failover once the current voice contact ends
        FAILOVER_PENDING = "failover_pending",
        INIT_DR_POLLING = "init_dr_polling",
    }
}

event_names! {
    voice_id ("voiceId") {
        UPDATE_DOMAIN_ID = "update_domain_id",
    }
}
