use std::sync::Mutex;
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[derive(Debug, Clone)]
pub struct ProcessStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub uptime: Duration,
}

/// 行程存活時間，啟用時另外提供 CPU / 記憶體資訊
pub struct SystemMonitor {
    system: Option<Mutex<System>>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: Mutex<u64>,
}

impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let (system, pid) = if enabled {
            let pid = sysinfo::get_current_pid()
                .map_err(|e| tracing::warn!("Process stats unavailable: {}", e))
                .ok();
            let mut system = System::new();
            // 初始刷新，CPU 使用率需要前一次的取樣
            if let Some(pid) = pid {
                refresh_own_process(&mut system, pid);
            }
            (Some(Mutex::new(system)), pid)
        } else {
            (None, None)
        };

        Self {
            system,
            pid,
            start_time: Instant::now(),
            peak_memory: Mutex::new(0),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some() && self.pid.is_some()
    }

    pub fn get_stats(&self) -> Option<ProcessStats> {
        let pid = self.pid?;
        let mut system = self.system.as_ref()?.lock().ok()?;
        refresh_own_process(&mut system, pid);

        let process = system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(ProcessStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: *peak,
            uptime: self.uptime(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Uptime: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.uptime
            );
        }
    }
}

/// 只刷新本行程，不掃描主機上的其他行程
fn refresh_own_process(system: &mut System, pid: Pid) -> usize {
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_cpu().with_memory(),
    )
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_uptime_only() {
        let monitor = SystemMonitor::default();
        assert!(!monitor.is_enabled());
        assert!(monitor.get_stats().is_none());
        std::thread::sleep(Duration::from_millis(5));
        assert!(monitor.uptime() >= Duration::from_millis(5));
    }

    #[test]
    fn test_enabled_monitor_reports_process() {
        let monitor = SystemMonitor::new(true);
        if let Some(stats) = monitor.get_stats() {
            assert!(stats.peak_memory_mb >= stats.memory_usage_mb);
        }
    }

    #[test]
    fn test_refresh_touches_only_own_process() {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(_) => return,
        };
        let mut system = System::new();

        assert_eq!(refresh_own_process(&mut system, pid), 1);
        assert!(system.process(pid).is_some());
        assert_eq!(system.processes().len(), 1);
    }

    #[test]
    fn test_peak_memory_never_decreases() {
        let monitor = SystemMonitor::new(true);
        let first = monitor.get_stats();
        let second = monitor.get_stats();
        if let (Some(first), Some(second)) = (first, second) {
            assert!(second.peak_memory_mb >= first.peak_memory_mb);
        }
    }
}
