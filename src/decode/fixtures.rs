//! Status documents captured from real controllers, trimmed for tests.

/// The smallest document the decoder accepts.
pub(crate) const MINIMAL_JSON: &str = r#"{
    "model": {
        "name": "mdl",
        "type": "typ",
        "controller": "ctl",
        "cloud": "aws",
        "version": "3.0.0"
    },
    "machines": {},
    "applications": {}
}"#;

/// A Kubernetes model with one application and one unit.
pub(crate) const SNAPPASS_JSON: &str = r#"{
    "model": {
        "name": "tt",
        "type": "caas",
        "controller": "microk8s-localhost",
        "cloud": "microk8s",
        "region": "localhost",
        "version": "3.6.1",
        "model-status": {
            "current": "available",
            "since": "24 Feb 2025 12:02:57+13:00"
        },
        "sla": "unsupported"
    },
    "machines": {},
    "applications": {
        "snappass-test": {
            "charm": "snappass-test",
            "base": {"name": "ubuntu", "channel": "20.04"},
            "charm-origin": "charmhub",
            "charm-name": "snappass-test",
            "charm-rev": 9,
            "charm-channel": "latest/stable",
            "scale": 1,
            "provider-id": "b5e9e4f1-3fd0-4a2d-9d3b-1b4f6c3d6e57",
            "address": "10.152.183.248",
            "exposed": false,
            "application-status": {
                "current": "active",
                "message": "snappass started",
                "since": "24 Feb 2025 12:04:44+13:00"
            },
            "relations": {
                "snappass": [
                    {
                        "related-application": "snappass-test",
                        "interface": "snappass",
                        "scope": "global"
                    }
                ]
            },
            "units": {
                "snappass-test/0": {
                    "workload-status": {
                        "current": "active",
                        "message": "snappass started",
                        "since": "24 Feb 2025 12:04:44+13:00"
                    },
                    "juju-status": {
                        "current": "idle",
                        "since": "24 Feb 2025 12:04:55+13:00",
                        "version": "3.6.1"
                    },
                    "leader": true,
                    "address": "10.1.164.138",
                    "provider-id": "snappass-test-0"
                }
            },
            "endpoint-bindings": {
                "": "alpha",
                "snappass": "alpha"
            }
        }
    },
    "storage": {
        "storage": {
            "data/0": {
                "kind": "filesystem",
                "status": {"current": "attached", "since": "24 Feb 2025 12:03:40+13:00"},
                "persistent": false,
                "life": "alive",
                "attachments": {
                    "units": {
                        "snappass-test/0": {"location": "/var/lib/snappass", "life": "alive"}
                    }
                }
            }
        },
        "filesystems": {
            "0": {
                "provider-id": "0b6e6f1a-0a3b-4bb8-a0d5-8b5c2f1cba3f",
                "storage": "data/0",
                "attachments": {
                    "containers": {
                        "snappass-test/0": {
                            "mount-point": "/var/lib/snappass",
                            "read-only": false,
                            "life": "alive"
                        }
                    },
                    "units": {
                        "snappass-test/0": {"life": "alive"}
                    }
                },
                "pool": "kubernetes",
                "size": 1024,
                "life": "alive",
                "status": {"current": "attached", "since": "24 Feb 2025 12:03:40+13:00"}
            }
        }
    },
    "controller": {
        "timestamp": "12:04:55+13:00"
    }
}"#;

/// A machine model on Juju 3 with a subordinate on two principals.
pub(crate) const SUBORDINATES_JSON: &str = r#"{
    "model": {
        "name": "subs",
        "type": "iaas",
        "controller": "lxd",
        "cloud": "localhost",
        "region": "localhost",
        "version": "3.6.8",
        "model-status": {"current": "available", "since": "01 Jul 2025 09:12:01Z"}
    },
    "machines": {
        "0": {
            "juju-status": {"current": "started", "since": "01 Jul 2025 09:14:26Z", "version": "3.6.8"},
            "hostname": "juju-8a1f2c-0",
            "dns-name": "10.103.56.99",
            "ip-addresses": ["10.103.56.99"],
            "instance-id": "juju-8a1f2c-0",
            "machine-status": {"current": "running", "message": "Running", "since": "01 Jul 2025 09:13:10Z"},
            "modification-status": {"current": "applied", "since": "01 Jul 2025 09:13:02Z"},
            "base": {"name": "ubuntu", "channel": "24.04"},
            "network-interfaces": {
                "eth0": {
                    "ip-addresses": ["10.103.56.99"],
                    "mac-address": "00:16:3e:7a:1b:2c",
                    "gateway": "10.103.56.1",
                    "space": "alpha",
                    "is-up": true
                }
            },
            "containers": {
                "0/lxd/0": {
                    "juju-status": {"current": "pending", "since": "01 Jul 2025 09:20:00Z"},
                    "instance-id": "pending",
                    "machine-status": {"current": "allocating", "since": "01 Jul 2025 09:20:00Z"},
                    "base": {"name": "ubuntu", "channel": "24.04"}
                }
            },
            "hardware": "arch=amd64 cores=0 mem=0M virt-type=container"
        },
        "1": {
            "juju-status": {"current": "started", "since": "01 Jul 2025 09:14:40Z", "version": "3.6.8"},
            "hostname": "juju-8a1f2c-1",
            "dns-name": "10.103.56.129",
            "ip-addresses": ["10.103.56.129"],
            "instance-id": "juju-8a1f2c-1",
            "machine-status": {"current": "running", "message": "Running", "since": "01 Jul 2025 09:13:30Z"},
            "modification-status": {"current": "applied", "since": "01 Jul 2025 09:13:02Z"},
            "base": {"name": "ubuntu", "channel": "24.04"}
        }
    },
    "applications": {
        "nrpe": {
            "charm": "nrpe",
            "base": {"name": "ubuntu", "channel": "24.04"},
            "charm-origin": "charmhub",
            "charm-name": "nrpe",
            "charm-rev": 127,
            "charm-channel": "latest/stable",
            "exposed": false,
            "application-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 09:16:51Z"},
            "relations": {
                "general-info": [
                    {"related-application": "ubun2", "interface": "juju-info", "scope": "container"},
                    {"related-application": "ubuntu", "interface": "juju-info", "scope": "container"}
                ]
            },
            "subordinate-to": ["ubun2", "ubuntu"],
            "endpoint-bindings": {"general-info": "alpha", "monitors": "alpha"}
        },
        "ubun2": {
            "charm": "ubuntu",
            "base": {"name": "ubuntu", "channel": "24.04"},
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 25,
            "charm-channel": "latest/stable",
            "exposed": false,
            "application-status": {"current": "active", "since": "01 Jul 2025 09:15:40Z"},
            "relations": {
                "juju-info": [
                    {"related-application": "nrpe", "interface": "juju-info", "scope": "container"}
                ]
            },
            "units": {
                "ubun2/0": {
                    "workload-status": {"current": "active", "since": "01 Jul 2025 09:15:40Z"},
                    "juju-status": {"current": "idle", "since": "01 Jul 2025 09:17:02Z", "version": "3.6.8"},
                    "leader": true,
                    "machine": "1",
                    "public-address": "10.103.56.129",
                    "subordinates": {
                        "nrpe/2": {
                            "workload-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 09:16:51Z"},
                            "juju-status": {"current": "idle", "since": "01 Jul 2025 09:16:55Z", "version": "3.6.8"},
                            "leader": true,
                            "open-ports": ["icmp", "5666/tcp"],
                            "public-address": "10.103.56.129"
                        }
                    }
                }
            }
        },
        "ubuntu": {
            "charm": "ubuntu",
            "base": {"name": "ubuntu", "channel": "24.04"},
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 25,
            "charm-channel": "latest/stable",
            "exposed": false,
            "application-status": {"current": "active", "since": "01 Jul 2025 09:15:21Z"},
            "relations": {
                "juju-info": [
                    {"related-application": "nrpe", "interface": "juju-info", "scope": "container"}
                ]
            },
            "units": {
                "ubuntu/1": {
                    "workload-status": {"current": "active", "since": "01 Jul 2025 09:15:21Z"},
                    "juju-status": {"current": "idle", "since": "01 Jul 2025 09:16:10Z", "version": "3.6.8"},
                    "leader": true,
                    "machine": "0",
                    "public-address": "10.103.56.99",
                    "subordinates": {
                        "nrpe/1": {
                            "workload-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 09:16:49Z"},
                            "juju-status": {"current": "idle", "since": "01 Jul 2025 09:16:53Z", "version": "3.6.8"},
                            "open-ports": ["icmp", "5666/tcp"],
                            "public-address": "10.103.56.99"
                        }
                    }
                }
            }
        }
    },
    "offers": {
        "ubuntu-info": {
            "application": "ubuntu",
            "charm": "ch:amd64/ubuntu-25",
            "total-connected-count": 1,
            "active-connected-count": 1,
            "endpoints": {
                "juju-info": {"interface": "juju-info", "role": "provider"}
            }
        }
    },
    "application-endpoints": {
        "prometheus": {
            "url": "lxd:admin/cos.prometheus",
            "endpoints": {
                "receive-remote-write": {"interface": "prometheus_remote_write", "role": "provider"}
            },
            "life": "alive",
            "application-status": {"current": "active", "since": "01 Jul 2025 09:18:00Z"},
            "relations": {"receive-remote-write": ["ubuntu"]}
        }
    },
    "controller": {
        "timestamp": "09:20:13Z"
    }
}"#;

/// The same deployment shape as [`SUBORDINATES_JSON`], as Juju 2.9 reports it.
pub(crate) const SUBORDINATES_JSON29: &str = r#"{
    "model": {
        "name": "subs",
        "type": "iaas",
        "controller": "lxd29",
        "cloud": "localhost",
        "region": "localhost",
        "version": "2.9.52",
        "model-status": {"current": "available", "since": "01 Jul 2025 10:01:44Z"},
        "sla": "unsupported"
    },
    "machines": {
        "0": {
            "juju-status": {"current": "started", "since": "01 Jul 2025 10:03:58Z", "version": "2.9.52"},
            "hostname": "juju-c01d3e-0",
            "dns-name": "10.36.4.84",
            "ip-addresses": ["10.36.4.84"],
            "instance-id": "juju-c01d3e-0",
            "machine-status": {"current": "running", "message": "Running", "since": "01 Jul 2025 10:02:40Z"},
            "modification-status": {"current": "idle", "since": "01 Jul 2025 10:02:31Z"},
            "series": "focal",
            "network-interfaces": {
                "eth0": {
                    "ip-addresses": ["10.36.4.84"],
                    "mac-address": "00:16:3e:11:22:33",
                    "gateway": "10.36.4.1",
                    "is-up": true
                }
            },
            "hardware": "arch=amd64 cores=0 mem=0M"
        },
        "1": {
            "juju-status": {"current": "started", "since": "01 Jul 2025 10:04:05Z", "version": "2.9.52"},
            "hostname": "juju-c01d3e-1",
            "dns-name": "10.36.4.173",
            "ip-addresses": ["10.36.4.173"],
            "instance-id": "juju-c01d3e-1",
            "machine-status": {"current": "running", "message": "Running", "since": "01 Jul 2025 10:02:52Z"},
            "modification-status": {"current": "idle", "since": "01 Jul 2025 10:02:31Z"},
            "series": "focal"
        }
    },
    "applications": {
        "nrpe": {
            "charm": "nrpe",
            "series": "focal",
            "os": "ubuntu",
            "charm-origin": "charmhub",
            "charm-name": "nrpe",
            "charm-rev": 97,
            "charm-channel": "stable",
            "exposed": false,
            "application-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 10:06:12Z"},
            "relations": {
                "general-info": ["ubun2", "ubuntu"]
            },
            "subordinate-to": ["ubun2", "ubuntu"],
            "endpoint-bindings": {"general-info": "alpha"}
        },
        "ubun2": {
            "charm": "ubuntu",
            "series": "focal",
            "os": "ubuntu",
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 24,
            "charm-channel": "stable",
            "exposed": false,
            "application-status": {"current": "active", "since": "01 Jul 2025 10:05:01Z"},
            "relations": {"juju-info": ["nrpe"]},
            "units": {
                "ubun2/0": {
                    "workload-status": {"current": "active", "since": "01 Jul 2025 10:05:01Z"},
                    "juju-status": {"current": "idle", "since": "01 Jul 2025 10:06:20Z", "version": "2.9.52"},
                    "leader": true,
                    "machine": "1",
                    "public-address": "10.36.4.173",
                    "subordinates": {
                        "nrpe/1": {
                            "workload-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 10:06:12Z"},
                            "juju-status": {"current": "idle", "since": "01 Jul 2025 10:06:15Z", "version": "2.9.52"},
                            "open-ports": ["icmp", "5666/tcp"],
                            "public-address": "10.36.4.173"
                        }
                    }
                }
            }
        },
        "ubuntu": {
            "charm": "ubuntu",
            "series": "focal",
            "os": "ubuntu",
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 24,
            "charm-channel": "stable",
            "exposed": false,
            "application-status": {"current": "active", "since": "01 Jul 2025 10:04:50Z"},
            "relations": {"juju-info": ["nrpe"]},
            "units": {
                "ubuntu/0": {
                    "workload-status": {"current": "active", "since": "01 Jul 2025 10:04:50Z"},
                    "juju-status": {"current": "idle", "since": "01 Jul 2025 10:05:40Z", "version": "2.9.52"},
                    "leader": true,
                    "machine": "0",
                    "public-address": "10.36.4.84",
                    "subordinates": {
                        "nrpe/0": {
                            "workload-status": {"current": "active", "message": "Ready", "since": "01 Jul 2025 10:06:09Z"},
                            "juju-status": {"current": "idle", "since": "01 Jul 2025 10:06:11Z", "version": "2.9.52"},
                            "leader": true,
                            "open-ports": ["icmp", "5666/tcp"],
                            "public-address": "10.36.4.84"
                        }
                    }
                }
            }
        }
    },
    "controller": {
        "timestamp": "10:06:31Z"
    }
}"#;

/// Every entity kind that can carry a `status-error`, on Juju 3.
pub(crate) const STATUS_ERRORS_JSON: &str = r#"{
    "model": {
        "name": "errs",
        "type": "iaas",
        "controller": "lxd",
        "cloud": "localhost",
        "version": "3.6.8",
        "model-status": {"status-error": "model status error!"}
    },
    "machines": {
        "machine-failed": {"status-error": "machine status error!"}
    },
    "applications": {
        "app-failed": {"status-error": "app status error!"},
        "unit-failed": {
            "charm": "ubuntu",
            "base": {"name": "ubuntu", "channel": "24.04"},
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 25,
            "exposed": false,
            "application-status": {"current": "unknown"},
            "units": {
                "unit-failed/0": {"status-error": "unit status error!"}
            }
        }
    },
    "offers": {
        "offer-failed": {"status-error": "offer status error!"}
    },
    "application-endpoints": {
        "remote-app-failed": {"status-error": "remote app status error!"}
    }
}"#;

/// Every entity kind that can carry a `status-error`, on Juju 2.9.
pub(crate) const STATUS_ERRORS_JSON29: &str = r#"{
    "model": {
        "name": "errs",
        "type": "iaas",
        "controller": "lxd29",
        "cloud": "localhost",
        "version": "2.9.52",
        "model-status": {"status-error": "model status error!"}
    },
    "machines": {
        "machine-failed": {"status-error": "machine status error!"}
    },
    "applications": {
        "app-failed": {"status-error": "app status error!"},
        "unit-failed": {
            "charm": "ubuntu",
            "series": "focal",
            "os": "ubuntu",
            "charm-origin": "charmhub",
            "charm-name": "ubuntu",
            "charm-rev": 24,
            "exposed": false,
            "application-status": {"current": "unknown"},
            "units": {
                "unit-failed/0": {"status-error": "unit status error!"}
            }
        }
    },
    "offers": {
        "offer-failed": {"status-error": "offer status error!"}
    },
    "application-endpoints": {
        "remote-app-failed": {"status-error": "remote app status error!"}
    }
}"#;
