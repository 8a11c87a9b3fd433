pub mod modules {
    pub mod counters {
        pub mod core {
            pub mod counter;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod create_counter {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_counters {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_counter {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod increment_counter {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
                pub mod path;
            }
            pub mod outbound {
                pub mod counter_store;
                pub mod counter_store_in_memory;
            }
        }
    }
}

pub mod shell;
