use spallcli::spotify::paging::{collect_all, for_each_chunk};

// Serves `total` items in pages of `page_size`, like a list endpoint with
// a stable ordering.
fn page_of(total: u32, page_size: u32, offset: u32) -> Vec<u32> {
    (offset..total.min(offset + page_size)).collect()
}

#[tokio::test]
async fn test_collect_all_gathers_every_item_in_order() {
    let mut offsets: Vec<u32> = Vec::new();

    let result: Result<Vec<u32>, String> = collect_all(50, |offset| {
        offsets.push(offset);
        let page = page_of(120, 50, offset);
        async move { Ok(page) }
    })
    .await;

    let items = result.unwrap();

    // All 120 items, in server order
    assert_eq!(items, (0..120).collect::<Vec<u32>>());

    // ceil(120/50)+1 calls: three full/partial pages plus the empty one
    assert_eq!(offsets, vec![0, 50, 100, 150]);
}

#[tokio::test]
async fn test_collect_all_exact_page_multiple() {
    let mut calls = 0;

    let result: Result<Vec<u32>, String> = collect_all(50, |offset| {
        calls += 1;
        let page = page_of(100, 50, offset);
        async move { Ok(page) }
    })
    .await;

    assert_eq!(result.unwrap().len(), 100);

    // Two full pages plus the empty page that signals exhaustion
    assert_eq!(calls, 3);
}

#[tokio::test]
async fn test_collect_all_empty_source() {
    let mut calls = 0;

    let result: Result<Vec<u32>, String> = collect_all(50, |offset| {
        calls += 1;
        let page = page_of(0, 50, offset);
        async move { Ok(page) }
    })
    .await;

    assert!(result.unwrap().is_empty());
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_collect_all_propagates_page_errors() {
    let result: Result<Vec<u32>, String> = collect_all(10, |offset| {
        let page: Result<Vec<u32>, String> = if offset == 10 {
            Err("bad gateway".to_string())
        } else {
            Ok(page_of(30, 10, offset))
        };
        async move { page }
    })
    .await;

    assert_eq!(result.unwrap_err(), "bad gateway");
}

#[tokio::test]
async fn test_for_each_chunk_covers_input_exactly_once() {
    let items: Vec<u32> = (0..120).collect();
    let mut batches: Vec<Vec<u32>> = Vec::new();

    let result: Result<(), String> = for_each_chunk(&items, 50, |chunk| {
        batches.push(chunk);
        async move { Ok(()) }
    })
    .await;

    assert!(result.is_ok());

    // ceil(120/50) calls with sizes 50, 50, 20
    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![50, 50, 20]);

    // Concatenated batches reproduce the input, no overlap, no gaps
    let flattened: Vec<u32> = batches.into_iter().flatten().collect();
    assert_eq!(flattened, items);
}

#[tokio::test]
async fn test_for_each_chunk_empty_input_issues_no_calls() {
    let items: Vec<u32> = Vec::new();
    let mut calls = 0;

    let result: Result<(), String> = for_each_chunk(&items, 50, |_chunk| {
        calls += 1;
        async move { Ok(()) }
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_for_each_chunk_stops_after_failing_batch() {
    let items: Vec<u32> = (0..120).collect();
    let mut calls = 0;

    let result: Result<(), String> = for_each_chunk(&items, 50, |_chunk| {
        calls += 1;
        let outcome: Result<(), String> = if calls == 2 {
            Err("rejected".to_string())
        } else {
            Ok(())
        };
        async move { outcome }
    })
    .await;

    assert_eq!(result.unwrap_err(), "rejected");

    // The first batch was already committed, the third never attempted
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn test_for_each_chunk_single_partial_batch() {
    let items: Vec<u32> = (0..7).collect();
    let mut batches: Vec<Vec<u32>> = Vec::new();

    let result: Result<(), String> = for_each_chunk(&items, 50, |chunk| {
        batches.push(chunk);
        async move { Ok(()) }
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 7);
}
