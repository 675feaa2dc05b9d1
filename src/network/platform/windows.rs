//! Windows adapter enumeration using `GetAdaptersAddresses`.

use crate::network::{AdapterEnumerator, AdapterRecord, EnumerationError};
use std::net::Ipv4Addr;
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IF_TYPE_SOFTWARE_LOOPBACK, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::{AF_INET, SOCKADDR_IN};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`AdapterEnumerator`].
///
/// Enumerates all adapters with their IPv4 unicast addresses, carrying
/// the friendly name, the stable adapter GUID, the operational status,
/// and the loopback classification needed by the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsEnumerator {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsEnumerator {
    /// Creates a new Windows adapter enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterEnumerator for WindowsEnumerator {
    fn enumerate(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        enumerate_adapters()
    }
}

/// Walks the adapter linked list returned by `GetAdaptersAddresses`.
fn enumerate_adapters() -> Result<Vec<AdapterRecord>, EnumerationError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut records = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for
    // IP_ADAPTER_ADDRESSES_LH; the Windows API guarantees alignment of the
    // returned data structures.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: The linked list is valid as long as `raw_adapters` is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(record) = parse_adapter(adapter) {
            records.push(record);
        }

        current = adapter.Next;
    }

    Ok(records)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// Handles the two-call pattern: first call with an estimated buffer size,
/// retry with the exact size if the buffer was too small.
fn get_adapter_addresses() -> Result<Vec<u8>, EnumerationError> {
    // Skip data we don't need (anycast, multicast, DNS servers)
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_INET.0); // IPv4 unicast addresses only

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with a larger buffer.
///
/// # Coverage Note
///
/// Excluded from coverage: the overflow case requires a system whose adapter
/// data exceeds 16KB, and the error paths require actual API failures.
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), EnumerationError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as the first call, but with a correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into an [`AdapterRecord`].
///
/// Returns `None` if neither name can be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterRecord> {
    // Friendly name is a wide string, adapter id a narrow GUID string
    let friendly_name = unsafe { adapter.FriendlyName.to_string().ok()? };
    let adapter_id = unsafe { adapter.AdapterName.to_string().ok() }.unwrap_or_default();

    let is_up = adapter.OperStatus == IfOperStatusUp;
    let is_loopback = adapter.IfType == IF_TYPE_SOFTWARE_LOOPBACK;

    let addresses = collect_ipv4_addresses(adapter);

    Some(AdapterRecord::new(
        friendly_name,
        adapter_id,
        is_up,
        is_loopback,
        addresses,
    ))
}

/// Collects IPv4 unicast addresses from an adapter, preserving list order.
///
/// # Safety Note
///
/// The pointer cast to `SOCKADDR_IN` is allowed despite alignment concerns
/// because Windows guarantees proper alignment of these structures when
/// returned from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn collect_ipv4_addresses(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<Ipv4Addr> {
    let mut addresses = Vec::new();

    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each entry is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let addr_entry = unsafe { &*unicast };

        // SAFETY: The Address field contains a valid SOCKET_ADDRESS structure.
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            if sockaddr.sa_family == AF_INET {
                // SAFETY: We verified the family is AF_INET, so this is a valid cast.
                let sockaddr_in = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
                // SAFETY: sin_addr contains the IPv4 address bytes in network order.
                let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
                addresses.push(Ipv4Addr::new(
                    octets.s_b1,
                    octets.s_b2,
                    octets.s_b3,
                    octets.s_b4,
                ));
            }
        }

        unicast = unsafe { (*unicast).Next };
    }

    addresses
}
