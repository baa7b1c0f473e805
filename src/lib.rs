pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod timecards {
        pub mod core {
            pub mod actions;
            pub mod decide;
            pub mod line;
            pub mod status;
            pub mod timecard;
            pub mod transition;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod manage_timesheets {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_lines {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transition_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod api_error;
                pub mod graphql;
                pub mod views;
            }
            pub mod outbound {
                pub mod timecard_store;
                pub mod timecard_store_in_memory;
            }
        }
    }
}

pub mod shell;
